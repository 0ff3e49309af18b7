//! Interactive catalog session
//!
//! An event loop over discrete user commands. Every mutation (filter change,
//! edit, import) is applied to the store synchronously by the event being
//! handled and followed by a full re-render - there is no partial update
//! path. Search input is the one exception: it goes through the debouncer
//! and re-renders once the idle window elapses.
//!
//! Recoverable errors (bad command, rejected credential, failed import) are
//! reported to the user and the loop continues; only I/O failures on the
//! session's own output terminate it.

use crate::core::edit::{edit_list, EditGate};
use crate::core::render::build_view;
use crate::core::store::CatalogStore;
use crate::io::export::{export_products, export_snapshot};
use crate::io::import::{self, BulkImport};
use crate::surface::debounce::Debouncer;
use crate::surface::text::ViewRenderer;
use crate::types::{CatalogError, RecordKind};
use std::io::Write;
use std::path::PathBuf;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

/// One discrete user action
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// Re-render the catalog
    Show,
    /// Debounced search input; empty text clears the criterion
    Search(String),
    /// Set the category criterion; empty clears it
    Category(String),
    /// Set the segment criterion; empty clears it
    Segment(String),
    /// Attempt to unlock the edit surface
    Login(String),
    /// List the editable field groups
    ListEdits,
    /// Write one product field by collection index
    Edit {
        index: usize,
        field: String,
        value: String,
    },
    /// Bulk-import selected files
    Import(BulkImport),
    /// Export the JSON snapshot
    ExportSnapshot(PathBuf),
    /// Export the products CSV
    ExportProducts(PathBuf),
    Help,
    Quit,
}

/// Whether the loop keeps going after an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Quit,
}

const HELP: &str = "\
Commands:
  show                          re-render the catalog
  search [text]                 filter by name/type/id substring (debounced)
  category [value]              filter by exact category; empty clears
  segment [value]               filter by exact segment; empty clears
  login <credential>            unlock the edit surface
  edits                         list editable products and fields
  edit <index> <field> [value]  write one product field
  import <kind>=<path> ...      replace collections (products, fees, limits, tiers)
  export-snapshot <path>        write the full catalog as JSON
  export-products <path>        write the product collection as CSV
  help                          show this text
  quit                          leave the session";

/// Parse one command line into a session event
///
/// Returns a usage message on malformed input; the caller shows it and
/// keeps the loop running.
pub fn parse_command(line: &str) -> Result<SessionEvent, String> {
    let trimmed = line.trim();
    let (command, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (trimmed, ""),
    };

    match command {
        "show" => Ok(SessionEvent::Show),
        "search" => Ok(SessionEvent::Search(rest.to_string())),
        "category" => Ok(SessionEvent::Category(rest.to_string())),
        "segment" => Ok(SessionEvent::Segment(rest.to_string())),
        "login" => {
            if rest.is_empty() {
                Err("usage: login <credential>".to_string())
            } else {
                Ok(SessionEvent::Login(rest.to_string()))
            }
        }
        "edits" => Ok(SessionEvent::ListEdits),
        "edit" => parse_edit(rest),
        "import" => parse_import(rest),
        "export-snapshot" => {
            if rest.is_empty() {
                Err("usage: export-snapshot <path>".to_string())
            } else {
                Ok(SessionEvent::ExportSnapshot(PathBuf::from(rest)))
            }
        }
        "export-products" => {
            if rest.is_empty() {
                Err("usage: export-products <path>".to_string())
            } else {
                Ok(SessionEvent::ExportProducts(PathBuf::from(rest)))
            }
        }
        "help" => Ok(SessionEvent::Help),
        "quit" | "exit" => Ok(SessionEvent::Quit),
        other => Err(format!("unknown command '{}'; try 'help'", other)),
    }
}

fn parse_edit(rest: &str) -> Result<SessionEvent, String> {
    const USAGE: &str = "usage: edit <index> <field> [value]";

    let mut parts = rest.splitn(3, char::is_whitespace);
    let index = parts
        .next()
        .filter(|part| !part.is_empty())
        .and_then(|part| part.parse::<usize>().ok())
        .ok_or_else(|| USAGE.to_string())?;
    let field = parts.next().ok_or_else(|| USAGE.to_string())?.to_string();
    let value = parts.next().unwrap_or("").trim().to_string();

    Ok(SessionEvent::Edit {
        index,
        field,
        value,
    })
}

fn parse_import(rest: &str) -> Result<SessionEvent, String> {
    const USAGE: &str =
        "usage: import <kind>=<path> ... (kinds: products, fees, limits, tiers)";

    let mut selection = BulkImport::default();
    for token in rest.split_whitespace() {
        let Some((kind, path)) = token.split_once('=') else {
            return Err(USAGE.to_string());
        };
        let kind = match kind {
            "products" => RecordKind::Products,
            "fees" => RecordKind::Fees,
            "limits" => RecordKind::Limits,
            "tiers" => RecordKind::InterestTiers,
            _ => return Err(USAGE.to_string()),
        };
        selection.select(kind, PathBuf::from(path));
    }

    if selection.is_empty() {
        Err(USAGE.to_string())
    } else {
        Ok(SessionEvent::Import(selection))
    }
}

/// The interactive session: store, gate, renderer, and search debouncer
pub struct Session<R: ViewRenderer> {
    store: CatalogStore,
    gate: EditGate,
    renderer: R,
    debouncer: Debouncer,
}

impl<R: ViewRenderer> Session<R> {
    pub fn new(store: CatalogStore, gate: EditGate, renderer: R) -> Self {
        Session {
            store,
            gate,
            renderer,
            debouncer: Debouncer::default(),
        }
    }

    /// The catalog state owned by this session
    pub fn store(&self) -> &CatalogStore {
        &self.store
    }

    /// Render the current catalog state
    pub fn render(&self, output: &mut dyn Write) -> Result<(), CatalogError> {
        self.renderer.render(&build_view(&self.store), output)
    }

    /// Apply a debounced search term and re-render
    fn apply_search(&mut self, term: &str, output: &mut dyn Write) -> Result<(), CatalogError> {
        self.store.set_search(term);
        self.render(output)
    }

    /// Handle one event
    ///
    /// Returns recoverable errors (rejected credential, bad edit target,
    /// failed import) for the caller to report; the session itself stays
    /// usable afterwards.
    pub async fn handle(
        &mut self,
        event: SessionEvent,
        output: &mut dyn Write,
    ) -> Result<Outcome, CatalogError> {
        match event {
            SessionEvent::Show => self.render(output)?,
            SessionEvent::Search(text) => self.debouncer.submit(text),
            SessionEvent::Category(category) => {
                self.store.set_category(&category);
                self.render(output)?;
            }
            SessionEvent::Segment(segment) => {
                self.store.set_segment(&segment);
                self.render(output)?;
            }
            SessionEvent::Login(credential) => {
                self.gate.unlock(&credential)?;
                writeln!(output, "Edit mode enabled")?;
            }
            SessionEvent::ListEdits => {
                if !self.require_unlocked(output)? {
                    return Ok(Outcome::Continue);
                }
                for product in edit_list(&self.store) {
                    let fields = product
                        .fields
                        .iter()
                        .map(|field| format!("{}={}", field.name, field.value))
                        .collect::<Vec<_>>()
                        .join(" ");
                    writeln!(output, "[{}] {}", product.index, fields)?;
                }
            }
            SessionEvent::Edit {
                index,
                field,
                value,
            } => {
                if !self.require_unlocked(output)? {
                    return Ok(Outcome::Continue);
                }
                self.store.edit_product_field(index, &field, value)?;
                self.render(output)?;
            }
            SessionEvent::Import(selection) => {
                let report = import::apply(&mut self.store, &selection).await?;
                self.render(output)?;
                writeln!(output, "{}", report)?;
            }
            SessionEvent::ExportSnapshot(path) => {
                export_snapshot(&self.store, &path)?;
                writeln!(output, "Snapshot written to {}", path.display())?;
            }
            SessionEvent::ExportProducts(path) => {
                export_products(&self.store, &path)?;
                writeln!(output, "Products written to {}", path.display())?;
            }
            SessionEvent::Help => writeln!(output, "{}", HELP)?,
            SessionEvent::Quit => return Ok(Outcome::Quit),
        }
        Ok(Outcome::Continue)
    }

    fn require_unlocked(&self, output: &mut dyn Write) -> Result<bool, CatalogError> {
        if self.gate.is_unlocked() {
            return Ok(true);
        }
        writeln!(output, "Edit mode is locked; use 'login <credential>' first")?;
        Ok(false)
    }

    /// Drive the session from a line-based input until quit or end of input
    pub async fn run<In>(&mut self, input: In, output: &mut dyn Write) -> Result<(), CatalogError>
    where
        In: AsyncBufRead + Unpin,
    {
        self.render(output)?;
        let mut lines = input.lines();

        loop {
            tokio::select! {
                line = lines.next_line() => {
                    let Some(line) = line? else { break };
                    if line.trim().is_empty() {
                        continue;
                    }
                    match parse_command(&line) {
                        Ok(event) => match self.handle(event, output).await {
                            Ok(Outcome::Quit) => break,
                            Ok(Outcome::Continue) => {}
                            // Recoverable: report and keep the loop alive.
                            Err(e) => writeln!(output, "{}", e)?,
                        },
                        Err(usage) => writeln!(output, "{}", usage)?,
                    }
                }
                term = self.debouncer.ready() => {
                    self.apply_search(&term, output)?;
                }
            }
        }
        Ok(())
    }
}
