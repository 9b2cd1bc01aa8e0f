use mercato_core::Product;
use std::sync::Arc;

use crate::api::CatalogApi;
use crate::error::ClientError;

/// Quanti prodotti chiede la pipeline a ogni fetch (il `limite=20` della
/// pagina di riferimento).
pub const PAGE_LIMIT: usize = 20;

/// Numero di sequenza monotono di una richiesta emessa. Una risposta viene
/// applicata solo se il suo ticket è l'ultimo emesso: vince l'ultima
/// richiesta partita, le altre vengono scartate (guardia anti-stantio).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

/// Macchina a stati del fetch: Idle → Loading → {Success, Error}.
/// Un Success vuoto NON è un errore: è un sotto-stato distinto.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState {
    Idle,
    Loading,
    Success(Vec<Product>),
    Error(String),
}

/// Proiezione per lo schermo: un solo stato transitorio (Loading, in cui
/// rientra anche Idle, come il flag iniziale della pagina di riferimento) e
/// tre stati terminali mutuamente esclusivi.
#[derive(Debug, Clone, PartialEq)]
pub enum Display {
    Loading,
    Showing(Vec<Product>),
    Empty,
    Failed(String),
}

/// La pipeline fetch/filtro del catalogo. Un solo proprietario la guida:
/// cambia selettore e testo di ricerca, manda avanti i fetch, legge la
/// proiezione. Il filtro a testo libero è solo locale e non rifà mai la rete.
pub struct ProductBrowser {
    api: Arc<dyn CatalogApi>,
    category: Option<String>,
    query: String,
    state: FetchState,
    issued: u64,
}

impl ProductBrowser {
    pub fn new(api: Arc<dyn CatalogApi>) -> Self {
        ProductBrowser {
            api,
            category: None,
            query: String::new(),
            state: FetchState::Idle,
            issued: 0,
        }
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn state(&self) -> &FetchState {
        &self.state
    }

    fn begin(&mut self) -> FetchTicket {
        self.issued += 1;
        self.state = FetchState::Loading;
        FetchTicket(self.issued)
    }

    /// Cambio del selettore di categoria. Emette un ticket (quindi un fetch)
    /// solo se il valore cambia davvero: riselezionare la stessa categoria
    /// non tocca la rete, come l'effect di riferimento che scatta solo al
    /// cambio di valore.
    pub fn select_category(&mut self, category: Option<String>) -> Option<FetchTicket> {
        if self.category == category {
            return None;
        }
        self.category = category;
        Some(self.begin())
    }

    /// Fetch incondizionato: primo caricamento e retry manuale.
    pub fn reload(&mut self) -> FetchTicket {
        self.begin()
    }

    /// Il testo di ricerca è un filtro puramente locale: mai un fetch.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Azzera testo e selettore. Di suo non fa rete; se però il selettore
    /// torna davvero a "tutte le categorie" quello è un cambio di categoria
    /// e produce il solito singolo refetch.
    pub fn clear_filters(&mut self) -> Option<FetchTicket> {
        self.query.clear();
        self.select_category(None)
    }

    /// Applica l'esito di una richiesta. Un ticket superato (ne è stato
    /// emesso uno più recente) viene scartato senza toccare lo stato.
    pub fn resolve(&mut self, ticket: FetchTicket, outcome: Result<Vec<Product>, ClientError>) {
        if ticket.0 != self.issued {
            return;
        }
        self.state = match outcome {
            Ok(products) => FetchState::Success(products),
            Err(e) => FetchState::Error(e.to_string()),
        };
    }

    /// Esegue davvero la richiesta associata al ticket e ne applica l'esito.
    pub async fn fetch(&mut self, ticket: FetchTicket) {
        let outcome = self
            .api
            .list_products(self.category.as_deref(), Some(PAGE_LIMIT))
            .await;
        self.resolve(ticket, outcome);
    }

    /// Proietta lo stato corrente per lo schermo, applicando il filtro a
    /// testo libero sull'insieme già scaricato.
    pub fn display(&self) -> Display {
        match &self.state {
            FetchState::Idle | FetchState::Loading => Display::Loading,
            FetchState::Error(message) => Display::Failed(message.clone()),
            FetchState::Success(products) => {
                let visible = filter_products(products, &self.query);
                if visible.is_empty() {
                    Display::Empty
                } else {
                    Display::Showing(visible)
                }
            }
        }
    }
}

/// Tiene i prodotti in cui la query compare come sottostringa
/// case-insensitive del nome O della descrizione. Query vuota: tutto passa.
pub fn filter_products(products: &[Product], query: &str) -> Vec<Product> {
    if query.is_empty() {
        return products.to_vec();
    }
    let needle = query.to_lowercase();
    products
        .iter()
        .filter(|p| {
            p.name.to_lowercase().contains(&needle)
                || p.description.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}
