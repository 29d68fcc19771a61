pub mod error;
pub mod fetch_abstract;
pub mod sanitize;
pub mod sparql_query;
pub mod sparql_res_body;
pub mod summary;
