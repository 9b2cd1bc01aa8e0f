//! mercato-client: il lato client del catalogo. Espone il client API
//! iniettabile (`CatalogApi` / `HttpCatalogClient`) e la pipeline
//! fetch/filtro (`ProductBrowser`) con la sua macchina a stati e la
//! guardia anti-risposte-stantie. Il rendering vero e proprio resta fuori:
//! qui finisce solo il contratto sui dati.

pub mod api;
pub mod browser;
pub mod error;

pub use api::{CatalogApi, HttpCatalogClient};
pub use browser::{Display, FetchState, FetchTicket, ProductBrowser, PAGE_LIMIT};
pub use error::ClientError;
