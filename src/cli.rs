//! Command-line front end: argument parsing and the subcommand handlers.
//!
//! Handlers write to any [`Write`] sink so the binary prints to stdout and
//! the tests read the output back.

use std::{io::Write, path::PathBuf};

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::{debug, error};

use crate::{
    config::AppConfig,
    models::{FiltroStorico, TipoMovimento},
    services::{magazzino_dimostrativo, MagazzinoService},
    views::{Azione, CaricoTab, EsauritiTab, GiacenzaTab, ModuloCarico, OrdiniTab, StoricoTab, Vista},
};

#[derive(Debug, Parser)]
#[command(name = "cartoni", version, about = "Magazzino carta e cartoni")]
pub struct Cli {
    #[arg(
        long,
        global = true,
        action = ArgAction::SetTrue,
        help = "Render command output as pretty JSON"
    )]
    pub json: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print one tab of a warehouse snapshot
    Mostra(MostraArgs),
    /// Run the demo scenario and print every tab
    Demo,
    /// List records referring to unregistered suppliers
    Verifica(VerificaArgs),
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Scheda {
    Ordini,
    Carico,
    Giacenza,
    Esauriti,
    Storico,
}

#[derive(Debug, Args)]
pub struct MostraArgs {
    #[arg(value_enum)]
    pub scheda: Scheda,
    #[arg(long, help = "JSON snapshot to load (defaults to `dati_iniziali`)")]
    pub dati: Option<PathBuf>,
    #[arg(long, help = "Only movements of this type (storico)")]
    pub tipo: Option<TipoMovimento>,
    #[arg(long, help = "Only movements for this supplier code (storico)")]
    pub codice: Option<String>,
    #[arg(long, help = "Movements from this date, YYYY-MM-DD (storico)")]
    pub dal: Option<NaiveDate>,
    #[arg(long, help = "Movements up to this date, YYYY-MM-DD (storico)")]
    pub al: Option<NaiveDate>,
}

impl MostraArgs {
    fn filtro(&self) -> FiltroStorico {
        FiltroStorico {
            tipo: self.tipo,
            codice: self.codice.clone(),
            dal: self.dal,
            al: self.al,
        }
    }
}

#[derive(Debug, Args)]
pub struct VerificaArgs {
    #[arg(long, help = "JSON snapshot to check")]
    pub dati: PathBuf,
}

/// Runs the parsed command line.
pub fn esegui(cli: Cli, config: AppConfig, out: &mut dyn Write) -> Result<()> {
    match cli.command {
        Commands::Mostra(args) => handle_mostra(config, args, cli.json, out),
        Commands::Demo => handle_demo(config, cli.json, out),
        Commands::Verifica(args) => handle_verifica(config, args, cli.json, out),
    }
}

fn carica(config: AppConfig, dati: Option<PathBuf>) -> Result<MagazzinoService> {
    let Some(percorso) = dati.or_else(|| config.dati_iniziali.clone()) else {
        debug!("No snapshot given, starting from an empty warehouse");
        return Ok(MagazzinoService::new(config));
    };
    MagazzinoService::da_file(&percorso, config)
        .map_err(|e| {
            error!(codice = e.codice(), "Snapshot rifiutato: {}", e);
            e
        })
        .with_context(|| format!("invalid snapshot {}", percorso.display()))
}

pub fn handle_mostra(
    config: AppConfig,
    args: MostraArgs,
    json: bool,
    out: &mut dyn Write,
) -> Result<()> {
    let filtro = args.filtro();
    let service = carica(config, args.dati)?;
    let valuta = service.config().valuta.as_str();

    match args.scheda {
        Scheda::Ordini => stampa(
            out,
            &OrdiniTab::new(Some(service.ordini())).con_valuta(valuta).render(),
            json,
        ),
        Scheda::Carico => {
            let modulo = ModuloCarico::default();
            stampa(out, &CaricoTab::new(&modulo).render(), json)
        }
        Scheda::Giacenza => stampa(
            out,
            &GiacenzaTab::new(Some(service.giacenza())).con_valuta(valuta).render(),
            json,
        ),
        Scheda::Esauriti => stampa(out, &EsauritiTab::new(Some(service.esauriti())).render(), json),
        Scheda::Storico => {
            let movimenti = service.storico_filtrato(&filtro);
            stampa(out, &StoricoTab::new(Some(&movimenti)).render().vista(), json)
        }
    }
}

pub fn handle_demo(config: AppConfig, json: bool, out: &mut dyn Write) -> Result<()> {
    let service = magazzino_dimostrativo(config).context("demo scenario failed")?;
    let valuta = service.config().valuta.as_str();

    let ordini = OrdiniTab::new(Some(service.ordini())).con_valuta(valuta).render();
    let giacenza = GiacenzaTab::new(Some(service.giacenza())).con_valuta(valuta).render();
    let esauriti = EsauritiTab::new(Some(service.esauriti())).render();
    let storico = StoricoTab::new(Some(service.storico())).render().vista();
    let riepilogo = service.riepilogo();

    if json {
        #[derive(Serialize)]
        struct Demo<'a, O, G, E, S, R> {
            ordini: &'a O,
            giacenza: &'a G,
            esauriti: &'a E,
            storico: &'a S,
            riepilogo: &'a R,
        }
        return print_json(
            out,
            &Demo {
                ordini: &ordini,
                giacenza: &giacenza,
                esauriti: &esauriti,
                storico: &storico,
                riepilogo: &riepilogo,
            },
        );
    }

    writeln!(out, "{}", ordini)?;
    writeln!(out, "{}", giacenza)?;
    writeln!(out, "{}", esauriti)?;
    writeln!(out, "{}", storico)?;
    writeln!(
        out,
        "Riepilogo: {} ordini in attesa, {} confermati, {} articoli in giacenza ({} fogli), {} esauriti, {} movimenti",
        riepilogo.ordini_in_attesa,
        riepilogo.ordini_confermati,
        riepilogo.articoli_in_giacenza,
        riepilogo.fogli_in_giacenza,
        riepilogo.articoli_esauriti,
        riepilogo.movimenti
    )?;
    Ok(())
}

/// Fails when any record points at an unregistered supplier, after listing them.
pub fn handle_verifica(
    config: AppConfig,
    args: VerificaArgs,
    json: bool,
    out: &mut dyn Write,
) -> Result<()> {
    let service = carica(config, Some(args.dati))?;
    let orfani = service.verifica_integrita();

    if json {
        print_json(out, &orfani)?;
    } else if orfani.is_empty() {
        writeln!(out, "Nessun riferimento a fornitori non registrati")?;
    } else {
        for orfano in &orfani {
            let id = orfano.id.map_or_else(|| "-".to_string(), |id| id.to_string());
            writeln!(out, "- {} {} • codice {}", orfano.sezione, id, orfano.codice)?;
        }
    }

    if !orfani.is_empty() {
        bail!("{} riferimenti a fornitori non registrati", orfani.len());
    }
    Ok(())
}

fn stampa<A: Azione + Serialize>(out: &mut dyn Write, vista: &Vista<A>, json: bool) -> Result<()> {
    if json {
        print_json(out, vista)
    } else {
        write!(out, "{}", vista)?;
        Ok(())
    }
}

fn print_json<T: Serialize>(out: &mut dyn Write, value: &T) -> Result<()> {
    writeln!(out, "{}", serde_json::to_string_pretty(value)?)?;
    Ok(())
}
