use mercato_core::{now_timestamp, Product, User};
use tokio::sync::RwLock;

/// Quanti prodotti restituisce listProducts quando `limite` non è specificato.
pub const DEFAULT_LIST_LIMIT: usize = 10;

/// Una collezione in memoria: righe in ordine di inserimento più il contatore
/// monotono degli id. Il contatore sta dentro il lock di scrittura, così
/// l'assegnazione dell'id è serializzata con l'inserimento (un solo scrittore
/// alla volta; i lettori procedono in parallelo).
struct Table<T> {
    rows: Vec<T>,
    next_id: u32,
}

impl<T> Table<T> {
    fn new() -> Self {
        Table {
            rows: Vec::new(),
            next_id: 1,
        }
    }
}

/// Dati di un prodotto già validati dal controller; id e createdAt li assegna lo store.
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub stock_quantity: u32,
    pub image: Option<String>,
}

/// Dati di un utente già validati; la password è stata scartata a monte.
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
}

/// Il dataset canonico del servizio. Vive solo nella memoria del processo:
/// il riferimento non persiste nulla e la persistenza è fuori dal perimetro.
pub struct CatalogStore {
    products: RwLock<Table<Product>>,
    users: RwLock<Table<User>>,
}

impl CatalogStore {
    pub fn empty() -> Self {
        CatalogStore {
            products: RwLock::new(Table::new()),
            users: RwLock::new(Table::new()),
        }
    }

    /// Store precaricato con il dataset dimostrativo del riferimento,
    /// nello stesso ordine di inserimento (id 1..4 e 1..2); i contatori
    /// ripartono dall'id successivo all'ultimo seminato.
    pub fn with_demo_data() -> Self {
        let products = demo_products();
        let users = demo_users();
        CatalogStore {
            products: RwLock::new(Table {
                next_id: products.last().map(|p| p.id + 1).unwrap_or(1),
                rows: products,
            }),
            users: RwLock::new(Table {
                next_id: users.last().map(|u| u.id + 1).unwrap_or(1),
                rows: users,
            }),
        }
    }

    /// Filtra per categoria (sottostringa case-insensitive) e poi tronca ai
    /// primi `limit` elementi del risultato, preservando l'ordine di
    /// inserimento. Nessun ordinamento, nessuna deduplica: lettura pura.
    pub async fn list_products(&self, category: Option<&str>, limit: usize) -> Vec<Product> {
        let table = self.products.read().await;
        match category {
            Some(wanted) => {
                let needle = wanted.to_lowercase();
                table
                    .rows
                    .iter()
                    .filter(|p| p.category.to_lowercase().contains(&needle))
                    .take(limit)
                    .cloned()
                    .collect()
            }
            None => table.rows.iter().take(limit).cloned().collect(),
        }
    }

    /// Ricerca reale per id: None quando l'id non esiste nel dataset.
    pub async fn get_product(&self, id: u32) -> Option<Product> {
        let table = self.products.read().await;
        table.rows.iter().find(|p| p.id == id).cloned()
    }

    pub async fn insert_product(&self, new: NewProduct) -> Product {
        let mut table = self.products.write().await;
        let product = Product {
            id: table.next_id,
            name: new.name,
            description: new.description,
            price: new.price,
            category: new.category,
            stock_quantity: new.stock_quantity,
            image: new.image,
            created_at: now_timestamp(),
        };
        table.next_id += 1;
        table.rows.push(product.clone());
        product
    }

    /// L'elenco utenti non ha filtri né limite nel contratto.
    pub async fn list_users(&self) -> Vec<User> {
        let table = self.users.read().await;
        table.rows.clone()
    }

    pub async fn get_user(&self, id: u32) -> Option<User> {
        let table = self.users.read().await;
        table.rows.iter().find(|u| u.id == id).cloned()
    }

    pub async fn insert_user(&self, new: NewUser) -> User {
        let mut table = self.users.write().await;
        let user = User {
            id: table.next_id,
            name: new.name,
            email: new.email,
            phone: new.phone,
            address: new.address,
            created_at: now_timestamp(),
        };
        table.next_id += 1;
        table.rows.push(user.clone());
        user
    }
}

fn demo_products() -> Vec<Product> {
    let created_at = now_timestamp();
    vec![
        Product {
            id: 1,
            name: "iPhone 15 Pro".to_string(),
            description: "Smartphone Apple mais avançado".to_string(),
            price: 7999.99,
            category: "Eletrônicos".to_string(),
            stock_quantity: 50,
            image: Some("/images/iphone15.jpg".to_string()),
            created_at: created_at.clone(),
        },
        Product {
            id: 2,
            name: "Samsung Galaxy S24".to_string(),
            description: "Flagship Samsung com IA".to_string(),
            price: 6999.99,
            category: "Eletrônicos".to_string(),
            stock_quantity: 35,
            image: Some("/images/galaxy-s24.jpg".to_string()),
            created_at: created_at.clone(),
        },
        Product {
            id: 3,
            name: "Notebook Dell XPS 13".to_string(),
            description: "Ultrabook profissional".to_string(),
            price: 8999.99,
            category: "Informática".to_string(),
            stock_quantity: 20,
            image: Some("/images/dell-xps13.jpg".to_string()),
            created_at: created_at.clone(),
        },
        Product {
            id: 4,
            name: "Tênis Nike Air Max".to_string(),
            description: "Tênis esportivo confortável".to_string(),
            price: 599.99,
            category: "Esportes".to_string(),
            stock_quantity: 100,
            image: Some("/images/nike-airmax.jpg".to_string()),
            created_at,
        },
    ]
}

fn demo_users() -> Vec<User> {
    let created_at = now_timestamp();
    vec![
        User {
            id: 1,
            name: "João Silva".to_string(),
            email: "joao@email.com".to_string(),
            phone: Some("(11) 99999-9999".to_string()),
            address: Some("Rua das Flores, 123".to_string()),
            created_at: created_at.clone(),
        },
        User {
            id: 2,
            name: "Maria Santos".to_string(),
            email: "maria@email.com".to_string(),
            phone: Some("(11) 88888-8888".to_string()),
            address: Some("Av. Principal, 456".to_string()),
            created_at,
        },
    ]
}
