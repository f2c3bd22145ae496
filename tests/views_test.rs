//! Rendering behaviour of the tabs.

mod common;

use assert_matches::assert_matches;
use cartoni::{
    services::AzioniOrdini,
    views::{
        Azione, AzioneOrdine, CaricoTab, EsauritiTab, GiacenzaTab, ModuloCarico, OrdiniTab,
        StoricoTab, VistaStorico, STORICO_VUOTO,
    },
};
use common::TestApp;

#[test]
fn absent_lists_render_as_zero() {
    assert_eq!(OrdiniTab::new(None).render().conteggio, 0);
    assert_eq!(GiacenzaTab::new(None).render().conteggio, 0);
    assert_eq!(EsauritiTab::new(None).render().conteggio, 0);
    assert_eq!(StoricoTab::new(None).render().vista().conteggio, 0);
}

#[test]
fn exhausted_tab_without_input_shows_zero() {
    let testo = EsauritiTab::new(None).render().to_string();
    assert!(testo.contains("(0)"), "unexpected output: {}", testo);
}

#[test]
fn orders_tab_counts_three_orders() {
    let mut app = TestApp::new();
    let ids = app.seed_ordini(3);

    let vista = OrdiniTab::new(Some(app.service.ordini())).render();

    assert_eq!(vista.conteggio, 3);
    assert!(vista.to_string().starts_with("== Ordini in attesa (3) =="));
    let azioni: Vec<_> = vista.righe.iter().flat_map(|r| r.azioni.iter()).collect();
    assert!(azioni.iter().all(|a| ids.contains(&a.id())));
    assert!(azioni.contains(&&AzioneOrdine::SpostaInGiacenza(ids[2])));
}

#[test]
fn empty_history_uses_the_literal_message() {
    let vuoto: Vec<cartoni::StoricoMovimento> = Vec::new();
    let vista = StoricoTab::new(Some(&vuoto)).render();

    assert_matches!(vista, VistaStorico::Vuoto);
    assert!(vista.vista().to_string().contains("Nessun movimento registrato"));
    assert_eq!(STORICO_VUOTO, "Nessun movimento registrato");
}

#[test]
fn history_table_receives_the_same_slice() {
    let mut app = TestApp::new();
    app.seed_ordini(2);
    let storico = app.service.storico();

    let vista = StoricoTab::new(Some(storico)).render();

    assert_matches!(vista, VistaStorico::Tabella(tabella) => {
        assert!(std::ptr::eq(tabella.movimenti(), storico));
        assert_eq!(tabella.movimenti().len(), 3);
    });
}

#[test]
fn rendering_leaves_inputs_unchanged() {
    let mut app = TestApp::new();
    let ids = app.seed_ordini(2);
    app.service.sposta_in_giacenza(ids[0]).unwrap();
    let prima = app.service.magazzino().clone();

    let _ = OrdiniTab::new(Some(app.service.ordini())).render();
    let _ = GiacenzaTab::new(Some(app.service.giacenza())).render();
    let _ = EsauritiTab::new(Some(app.service.esauriti())).render();
    let _ = StoricoTab::new(Some(app.service.storico())).render().vista();
    let modulo = ModuloCarico::default();
    let _ = CaricoTab::new(&modulo).render();

    assert_eq!(app.service.magazzino(), &prima);
    assert_eq!(modulo, ModuloCarico::default());
}

#[test]
fn views_serialize_with_action_descriptors() {
    let mut app = TestApp::new();
    let ids = app.seed_ordini(1);

    let json = serde_json::to_value(OrdiniTab::new(Some(app.service.ordini())).render()).unwrap();

    assert_eq!(json["conteggio"], 1);
    assert_eq!(json["righe"][0]["azioni"][0]["azione"], "sposta_in_giacenza");
    assert_eq!(json["righe"][0]["azioni"][0]["id"], ids[0].to_string());
}
