//! Subcommands run end to end through the parsed command line, against
//! snapshots written to a temporary directory.

mod common;

use std::{fs, path::Path};

use cartoni::{
    cli::{self, Cli},
    config::AppConfig,
    services::{AzioniCarico, AzioniGiacenza, AzioniOrdini},
};
use chrono::{Days, Utc};
use clap::Parser;
use common::{ordine, TestApp};
use tempfile::TempDir;

fn esegui(args: &[&str]) -> (anyhow::Result<()>, String) {
    let cli = Cli::try_parse_from(args).unwrap();
    let mut out = Vec::new();
    let esito = cli::esegui(cli, AppConfig::default(), &mut out);
    (esito, String::from_utf8(out).unwrap())
}

fn salva(app: &TestApp, dir: &Path) -> String {
    let percorso = dir.join("magazzino.json");
    fs::write(&percorso, app.service.to_json().unwrap()).unwrap();
    percorso.to_string_lossy().into_owned()
}

/// Two batches received, one partly consumed, plus a pending order.
fn magazzino_con_movimenti() -> TestApp {
    let mut app = TestApp::new();
    let ids = app.seed_ordini(3);
    let primo = app.service.sposta_in_giacenza(ids[0]).unwrap();
    app.service.sposta_in_giacenza(ids[1]).unwrap();
    app.service.scarica(primo, 300).unwrap();
    app
}

#[test]
fn integrity_check_fails_when_orphans_exist() {
    let dir = TempDir::new().unwrap();
    let mut app = TestApp::with_config(AppConfig {
        verifica_fornitori: false,
        ..AppConfig::default()
    });
    let mut estraneo = ordine("EXT-7", 100);
    estraneo.codice = "ALTRO".into();
    app.service.aggiungi_ordine(estraneo).unwrap();
    let dati = salva(&app, dir.path());

    let (esito, testo) = esegui(&["cartoni", "verifica", "--dati", &dati]);

    let errore = esito.unwrap_err();
    assert_eq!(errore.to_string(), "1 riferimenti a fornitori non registrati");
    assert!(testo.contains("- ordini"), "unexpected output: {}", testo);
    assert!(testo.contains("codice ALTRO"));
}

#[test]
fn integrity_check_passes_on_a_clean_snapshot() {
    let dir = TempDir::new().unwrap();
    let dati = salva(&magazzino_con_movimenti(), dir.path());

    let (esito, testo) = esegui(&["cartoni", "verifica", "--dati", &dati]);
    assert!(esito.is_ok());
    assert_eq!(testo.trim(), "Nessun riferimento a fornitori non registrati");

    let (esito, testo) = esegui(&["cartoni", "--json", "verifica", "--dati", &dati]);
    assert!(esito.is_ok());
    assert_eq!(serde_json::from_str::<serde_json::Value>(&testo).unwrap(), serde_json::json!([]));
}

#[test]
fn history_filters_narrow_the_listed_movements() {
    let dir = TempDir::new().unwrap();
    let app = magazzino_con_movimenti();
    let dati = salva(&app, dir.path());
    let oggi = Utc::now().date_naive();
    let ieri = (oggi - Days::new(1)).to_string();
    let domani = (oggi + Days::new(1)).to_string();

    let righe = |filtri: &[&str]| -> Vec<serde_json::Value> {
        let mut args = vec!["cartoni", "--json", "mostra", "storico", "--dati", dati.as_str()];
        args.extend_from_slice(filtri);
        let (esito, testo) = esegui(&args);
        esito.unwrap();
        let vista: serde_json::Value = serde_json::from_str(&testo).unwrap();
        vista["righe"].as_array().cloned().unwrap_or_default()
    };

    assert_eq!(righe(&[]).len(), app.service.storico().len());

    let carichi = righe(&["--tipo", "carico"]);
    assert_eq!(carichi.len(), 2);
    assert!(carichi.iter().all(|r| r["celle"][1] == "carico"));

    let scarichi = righe(&["--tipo", "scarico", "--codice", "CART01", "--dal", &ieri]);
    assert_eq!(scarichi.len(), 1);
    assert_eq!(scarichi[0]["celle"][4], "300");

    assert!(righe(&["--codice", "cart01"]).is_empty());
    assert!(righe(&["--al", &ieri]).is_empty());
    assert!(righe(&["--dal", &domani]).is_empty());
}

#[test]
fn empty_history_prints_the_empty_state() {
    let dir = TempDir::new().unwrap();
    let dati = salva(&magazzino_con_movimenti(), dir.path());

    let (esito, testo) = esegui(&[
        "cartoni", "mostra", "storico", "--dati", &dati, "--tipo", "ripristino",
    ]);

    assert!(esito.is_ok());
    assert!(testo.contains("Storico movimenti (0)"), "unexpected output: {}", testo);
    assert!(testo.contains("Nessun movimento registrato"));
}

#[test]
fn inconsistent_snapshot_is_refused_before_printing() {
    let dir = TempDir::new().unwrap();
    let mut valore: serde_json::Value =
        serde_json::from_str(&magazzino_con_movimenti().service.to_json().unwrap()).unwrap();
    valore["giacenza"][0]["fogli_disponibili"] = 0.into();
    let percorso = dir.path().join("guasto.json");
    fs::write(&percorso, valore.to_string()).unwrap();
    let dati = percorso.to_string_lossy().into_owned();

    let (esito, testo) = esegui(&["cartoni", "mostra", "giacenza", "--dati", &dati]);

    let errore = esito.unwrap_err();
    assert!(errore.to_string().starts_with("invalid snapshot"));
    assert!(testo.is_empty());
}

#[test]
fn missing_snapshot_file_is_reported() {
    let dir = TempDir::new().unwrap();
    let dati = dir.path().join("assente.json").to_string_lossy().into_owned();

    let (esito, _) = esegui(&["cartoni", "verifica", "--dati", &dati]);

    let errore = format!("{:#}", esito.unwrap_err());
    assert!(errore.contains("failed to read snapshot"), "unexpected error: {}", errore);
}

#[test]
fn demo_prints_every_tab_and_the_summary() {
    let (esito, testo) = esegui(&["cartoni", "demo"]);

    assert!(esito.is_ok());
    for titolo in ["Ordini in attesa", "Giacenza", "Esauriti", "Storico movimenti"] {
        assert!(testo.contains(&format!("== {} (", titolo)), "missing {}", titolo);
    }
    assert!(testo.contains("Riepilogo: 1 ordini in attesa, 1 confermati"));
}
