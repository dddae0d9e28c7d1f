//! ontoviz-web — HTTP front end for the taxonomy graph.
//!   - `GET /`            HTML page that draws the graph
//!   - `GET /graph_data`  node-link JSON of the graph
//!   - `GET /favicon.ico` site icon
//!   - `GET /static/*`    front-end assets

pub mod router;
pub mod handlers;
pub mod state;
