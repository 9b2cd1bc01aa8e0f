use mercato_core::*;
use serde_json::{self as json, Value};

fn parse(json_str: &str) -> Value {
    json::from_str(json_str).expect("valid json")
}

fn sample_product() -> Product {
    Product {
        id: 1,
        name: "iPhone 15 Pro".to_string(),
        description: "Smartphone Apple mais avançado".to_string(),
        price: 7999.99,
        category: "Eletrônicos".to_string(),
        stock_quantity: 50,
        image: Some("/images/iphone15.jpg".to_string()),
        created_at: "2026-08-24T10:20:30Z".to_string(),
    }
}

/*
    Obiettivo test: verificare che la busta di successo abbia esattamente la forma
    { success: true, data: <payload>, message: <testo> } e che i campi del prodotto
    escano in camelCase (stockQuantity, createdAt).
    Verificare anche che lo stesso JSON sia deserializzabile di nuovo nello stesso valore Rust.
*/
#[test]
fn envelope_ok_roundtrip_with_camel_case_fields() {
    let envelope = Envelope::ok(vec![sample_product()], "Produtos encontrados com sucesso");

    let s = json::to_string(&envelope).expect("serialize");
    let v = parse(&s);

    assert_eq!(v["success"], true);
    assert_eq!(v["message"], "Produtos encontrados com sucesso");
    assert_eq!(v["data"][0]["id"], 1);
    assert_eq!(v["data"][0]["stockQuantity"], 50);
    assert_eq!(v["data"][0]["createdAt"], "2026-08-24T10:20:30Z");
    assert_eq!(v["data"][0]["image"], "/images/iphone15.jpg");

    let back: Envelope<Vec<Product>> = json::from_str(&s).expect("deserialize");
    assert_eq!(back, envelope);
}

/*
    Obiettivo test: verificare che la busta di errore ometta del tutto il campo data
    (non deve comparire come null) e che la deserializzazione lo legga come None.
*/
#[test]
fn envelope_fail_omits_data_field() {
    let envelope = Envelope::<Product>::fail("Produto não encontrado");

    let s = json::to_string(&envelope).expect("serialize");
    let v = parse(&s);

    assert_eq!(v["success"], false);
    assert_eq!(v["message"], "Produto não encontrado");
    assert!(v.get("data").is_none(), "data must be absent, not null");

    let back: Envelope<Product> = json::from_str(&s).expect("deserialize");
    assert!(back.data.is_none());
    assert!(!back.success);
}

/*
    Obiettivo test: un prodotto senza immagine non deve serializzare il campo image;
    il client riceve l'assenza e mostra il segnaposto.
*/
#[test]
fn product_without_image_omits_field() {
    let mut product = sample_product();
    product.image = None;

    let s = json::to_string(&product).expect("serialize");
    let v = parse(&s);

    assert!(v.get("image").is_none());

    let back: Product = json::from_str(&s).expect("deserialize");
    assert_eq!(back, product);
}

/*
    Obiettivo test: roundtrip dell'utente con i campi facoltativi valorizzati e
    verifica dei nomi camelCase sul wire. Il modello non ha alcun campo password.
*/
#[test]
fn user_roundtrip_with_optional_fields() {
    let user = User {
        id: 1,
        name: "João Silva".to_string(),
        email: "joao@email.com".to_string(),
        phone: Some("(11) 99999-9999".to_string()),
        address: Some("Rua das Flores, 123".to_string()),
        created_at: "2026-08-24T09:00:00Z".to_string(),
    };

    let s = json::to_string(&user).expect("serialize");
    let v = parse(&s);

    assert_eq!(v["name"], "João Silva");
    assert_eq!(v["phone"], "(11) 99999-9999");
    assert_eq!(v["createdAt"], user.created_at);
    assert!(v.get("password").is_none());

    let back: User = json::from_str(&s).expect("deserialize");
    assert_eq!(back, user);
}

/*
    Obiettivo test: un utente senza telefono né indirizzo ne omette i campi sul wire.
*/
#[test]
fn user_omits_absent_optional_fields() {
    let user = User {
        id: 2,
        name: "Maria Santos".to_string(),
        email: "maria@email.com".to_string(),
        phone: None,
        address: None,
        created_at: "2026-08-24T09:00:00Z".to_string(),
    };

    let s = json::to_string(&user).expect("serialize");
    let v = parse(&s);

    assert!(v.get("phone").is_none());
    assert!(v.get("address").is_none());
}

/*
    Obiettivo test: nel corpo di creazione prodotto la presenza del campo va
    distinta dal suo valore. stockQuantity assente deve diventare None;
    stockQuantity: 0 deve restare Some(0), perché zero è un valore legittimo.
*/
#[test]
fn create_product_request_distinguishes_missing_from_zero_stock() {
    let without_stock: CreateProductRequest =
        json::from_str(r#"{"name":"Tênis","description":"","price":599.99,"category":"Esportes"}"#)
            .expect("deserialize");
    assert_eq!(without_stock.stock_quantity, None);

    let zero_stock: CreateProductRequest = json::from_str(
        r#"{"name":"Tênis","description":"","price":599.99,"category":"Esportes","stockQuantity":0}"#,
    )
    .expect("deserialize");
    assert_eq!(zero_stock.stock_quantity, Some(0));
}

/*
    Obiettivo test: il client serializza solo i campi valorizzati della richiesta,
    così un campo lasciato a None arriva al server come davvero assente.
*/
#[test]
fn create_product_request_serializes_only_present_fields() {
    let request = CreateProductRequest {
        name: Some("Carregador USB-C".to_string()),
        price: Some(129.9),
        ..Default::default()
    };

    let s = json::to_string(&request).expect("serialize");
    let v = parse(&s);

    assert_eq!(v["name"], "Carregador USB-C");
    assert_eq!(v["price"], 129.9);
    assert!(v.get("description").is_none());
    assert!(v.get("stockQuantity").is_none());
    assert!(v.get("image").is_none());
}

/*
    Obiettivo test: roundtrip della risposta di /health (fuori busta) con i nomi attesi.
*/
#[test]
fn health_status_roundtrip() {
    let health = HealthStatus {
        status: "OK".to_string(),
        database: "Connected".to_string(),
        timestamp: "2026-08-24T12:00:00Z".to_string(),
        uptime: 42,
    };

    let s = json::to_string(&health).expect("serialize");
    let v = parse(&s);

    assert_eq!(v["status"], "OK");
    assert_eq!(v["database"], "Connected");
    assert_eq!(v["uptime"], 42);

    let back: HealthStatus = json::from_str(&s).expect("deserialize");
    assert_eq!(back, health);
}
