use serde_derive::Deserialize;
use std::collections::HashMap;

// SPARQL 1.1 Query Results JSON Format
// https://www.w3.org/TR/sparql11-results-json/
#[derive(Deserialize, Debug, Clone, Default)]
pub struct SparqlResBody {
    // head: { vars: [...] }
    pub results: SparqlResults,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct SparqlResults {
    pub bindings: Vec<HashMap<String, SparqlTerm>>,
}

// type, xml:lang は使わない
#[derive(Deserialize, Debug, Clone, Default)]
pub struct SparqlTerm {
    pub value: String,
}

impl SparqlResBody {
    // 先頭の結果から変数の値を取得する (空文字はNone扱い)
    pub fn first_value(&self, var: &str) -> Option<&str> {
        self.results
            .bindings
            .first()
            .and_then(|binding| binding.get(var))
            .map(|term| term.value.as_str())
            .filter(|value| !value.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_value() {
        let body = r#"{
            "head": { "link": [], "vars": ["label", "abstract"] },
            "results": { "distinct": false, "ordered": true, "bindings": [
                {
                    "label": { "type": "literal", "xml:lang": "fr", "value": "Paris" },
                    "abstract": { "type": "literal", "xml:lang": "fr", "value": "Paris est la capitale de la France." }
                },
                {
                    "label": { "type": "literal", "xml:lang": "fr", "value": "Lyon" },
                    "abstract": { "type": "literal", "xml:lang": "fr", "value": "Lyon est une ville." }
                }
            ] }
        }"#;
        let json: SparqlResBody = serde_json::from_str(body).unwrap();
        assert_eq!(json.first_value("label"), Some("Paris"));
        assert_eq!(
            json.first_value("abstract"),
            Some("Paris est la capitale de la France.")
        );
        assert_eq!(json.first_value("missing"), None);
    }

    #[test]
    fn test_first_value_empty() {
        let body = r#"{
            "head": { "vars": ["abstract"] },
            "results": { "bindings": [ { "abstract": { "type": "literal", "value": "" } } ] }
        }"#;
        let json: SparqlResBody = serde_json::from_str(body).unwrap();
        assert_eq!(json.first_value("abstract"), None);

        let no_bindings: SparqlResBody =
            serde_json::from_str(r#"{ "results": { "bindings": [] } }"#).unwrap();
        assert_eq!(no_bindings.first_value("abstract"), None);
    }
}
