use gstinvoice_app::{AppError, InvoiceForm, Page, Session};
use gstinvoice_invoicing::{DraftAction, MissingField};
use gstinvoice_parties::{BuyerRepository, JsonFileBuyerRepository};
use gstinvoice_render::{HtmlRenderer, SellerProfile, TextRenderer};
use serde_json::json;

fn form(body: serde_json::Value) -> InvoiceForm {
    serde_json::from_value(body).unwrap()
}

fn acme_form() -> InvoiceForm {
    form(json!({
        "invoiceNo": "SB/101",
        "invoiceDate": "2024-04-05",
        "poNo": "PO-77",
        "buyer": { "name": "Acme Textiles", "address": "Plot 4, Okhla Phase II", "gstin": "07aaaca1234a1z5" },
        "shippingAddress": "Gate 2, Okhla",
        "transportName": "Speed Cargo",
        "vehicleNo": "UP16 AB 1234",
        "products": [
            { "description": "Flat belt", "hsn": "5910", "qty": 2, "rate": 100 },
            { "description": "Fastener", "qty": 1, "rate": "50.50" }
        ]
    }))
}

#[test]
fn form_to_printed_invoice() {
    let dir = tempfile::tempdir().unwrap();
    let repo = JsonFileBuyerRepository::new(dir.path().join("store.json"));
    let mut session = Session::open(repo, SellerProfile::default()).unwrap();

    session.fill(&acme_form()).unwrap();
    let document = session.submit().unwrap();

    assert_eq!(session.page(), Page::Preview);
    assert_eq!(document.meta.invoice_date, "05/04/2024");
    assert_eq!(
        document.amount_in_words,
        "Two Hundred and Eighty Rupees and Fifty Six Paise Only"
    );

    let html = session.render(&HtmlRenderer::new()).unwrap();
    assert!(html.contains("<td colspan=\"6\" class=\"label\">IGST @12%</td><td>₹ 30.06</td>"));
    assert!(html.contains("07AAACA1234A1Z5"));

    let text = session.render(&TextRenderer::new()).unwrap();
    assert!(text.contains("Vehicle No.: UP16 AB 1234"));
}

#[test]
fn buyers_persist_across_sessions_and_autocomplete() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data").join("store.json");

    let mut first = Session::open(JsonFileBuyerRepository::new(&path), SellerProfile::default())
        .unwrap();
    first.fill(&acme_form()).unwrap();
    first.submit().unwrap();

    let stored = JsonFileBuyerRepository::new(&path).load().unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].gstin, "07AAACA1234A1Z5");

    let mut second = Session::open(JsonFileBuyerRepository::new(&path), SellerProfile::default())
        .unwrap();
    assert_eq!(second.buyer_suggestions("acme"), vec!["Acme Textiles"]);

    second
        .dispatch(DraftAction::SetBuyerName("Acme Textiles".to_string()))
        .unwrap();
    assert_eq!(second.draft().buyer().address, "Plot 4, Okhla Phase II");
    assert_eq!(second.draft().buyer().gstin, "07AAACA1234A1Z5");
}

#[test]
fn incomplete_form_is_not_submitted_or_stored() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.json");
    let mut session = Session::open(JsonFileBuyerRepository::new(&path), SellerProfile::default())
        .unwrap();

    session
        .fill(&form(json!({
            "buyer": { "name": "Shah Industries" },
            "products": [{ "qty": 3, "rate": 10 }]
        })))
        .unwrap();

    match session.submit() {
        Err(AppError::MissingFields(fields)) => assert_eq!(
            fields,
            vec![
                MissingField::BillingAddress,
                MissingField::ShippingAddress,
                MissingField::LineDescription(1),
            ]
        ),
        other => panic!("expected missing fields, got {other:?}"),
    }
    assert_eq!(session.page(), Page::Edit);
    assert!(!path.exists());
}

#[test]
fn negative_rate_in_form_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = Session::open(
        JsonFileBuyerRepository::new(dir.path().join("store.json")),
        SellerProfile::default(),
    )
    .unwrap();

    let err = session
        .fill(&form(json!({ "products": [{ "description": "Belt", "rate": -4 }] })))
        .unwrap_err();

    assert!(matches!(err, AppError::Domain(_)));
}
