//! Interactive browse loop.
//!
//! Page loads run as spawned tasks and report back over a channel; the loop
//! applies them through the session, which drops any result that was
//! overtaken by a newer request.

use gallery_lib::ArticClient;
use gallery_lib::BrowseSession;
use gallery_lib::api::Page;
use gallery_lib::api::PageLoader;
use gallery_lib::error::FetchError;
use gallery_lib::selection::parse_select_count;
use gallery_lib::session::LoadOutcome;
use gallery_lib::session::PageRequest;
use tokio::io::AsyncBufReadExt;
use tokio::io::BufReader;
use tokio::sync::mpsc;

use crate::command::Command;
use crate::command::HELP;
use crate::render;

type LoadResult = (PageRequest, Result<Page, FetchError>);

/// Whether the loop keeps running after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

pub struct App {
    session: BrowseSession<ArticClient>,
    loads: mpsc::UnboundedSender<LoadResult>,
}

impl App {
    /// Runs until `quit` or end of input.
    pub async fn run(client: ArticClient, page_size: u32, start_page: u32) -> std::io::Result<()> {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut app = App {
            session: BrowseSession::new(client, page_size),
            loads: tx,
        };

        println!("{}", HELP);
        app.spawn_load(start_page);

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            tokio::select! {
                line = lines.next_line() => {
                    let Some(line) = line? else { break };
                    if app.handle_line(&line) == Flow::Quit {
                        break;
                    }
                }
                Some((request, result)) = rx.recv() => app.handle_load(request, result),
            }
        }

        log::info!(
            "Session ended with {} records selected",
            app.session.selection().state().len()
        );
        Ok(())
    }

    fn spawn_load(&mut self, page_index: u32) {
        let request = self.session.request_page(page_index);
        self.spawn_fetch(request);
    }

    fn spawn_fetch(&self, request: PageRequest) {
        let loader = self.session.loader().clone();
        let tx = self.loads.clone();

        tokio::spawn(async move {
            let result = loader
                .load_page(request.page_index(), request.page_size())
                .await;
            let _ = tx.send((request, result));
        });

        println!("Loading page {}...", request.page_index());
    }

    fn handle_load(&mut self, request: PageRequest, result: Result<Page, FetchError>) {
        match self.session.apply_load(request, result) {
            LoadOutcome::Applied { reconciled, .. } => {
                self.show_page();
                if !reconciled.is_empty() {
                    println!("Auto-selected {} records for the target.", reconciled.len());
                }
            }
            LoadOutcome::Stale { .. } => {}
            LoadOutcome::Failed(_) => self.show_load_state(),
        }
    }

    fn handle_line(&mut self, line: &str) -> Flow {
        let command = match Command::parse(line) {
            Ok(Some(command)) => command,
            Ok(None) => return Flow::Continue,
            Err(e) => {
                println!("{}", e);
                return Flow::Continue;
            }
        };

        match command {
            Command::Page(index) => self.spawn_load(index),
            Command::Next => match self.session.navigation() {
                Some(nav) => match nav.next_index() {
                    Some(index) => self.spawn_load(index),
                    None => println!("Already on the last page."),
                },
                None => println!("No page loaded yet."),
            },
            Command::Prev => match self.session.navigation() {
                Some(nav) => match nav.prev_index() {
                    Some(index) => self.spawn_load(index),
                    None => println!("Already on the first page."),
                },
                None => println!("No page loaded yet."),
            },
            Command::Reload => {
                let request = self.session.reload();
                self.spawn_fetch(request);
            }
            Command::Select(ids) => {
                if self.require_page() {
                    self.session.apply_page_edit(ids);
                    self.show_page();
                }
            }
            Command::Toggle(id) => {
                if self.require_page() {
                    match self.session.toggle_record(id) {
                        Some(_) => self.show_page(),
                        None => println!("Record {} is not on this page.", id),
                    }
                }
            }
            Command::SelectAll => self.toggle_page(true),
            Command::ClearAll => self.toggle_page(false),
            Command::First(raw) => match parse_select_count(&raw) {
                Ok(n) => {
                    self.session.request_select_first_n(n.get());
                    self.show_page();
                    self.show_status();
                }
                Err(e) => log::debug!("Ignoring select-first input: {}", e),
            },
            Command::Show => {
                self.show_page();
                self.show_load_state();
            }
            Command::Status => self.show_status(),
            Command::Help => println!("{}", HELP),
            Command::Quit => return Flow::Quit,
        }
        Flow::Continue
    }

    fn toggle_page(&mut self, select_all: bool) {
        if self.require_page() {
            self.session.toggle_all(select_all);
            self.show_page();
        }
    }

    fn require_page(&self) -> bool {
        let loaded = self.session.page().is_some();
        if !loaded {
            println!("No page loaded yet.");
        }
        loaded
    }

    fn show_page(&self) {
        if let Some(page) = self.session.page() {
            print!("{}", render::page_table(page, self.session.selection()));
        }
    }

    fn show_status(&self) {
        println!("{}", render::selection_status(self.session.selection().state()));
    }

    fn show_load_state(&self) {
        if let Some(line) = render::load_status(self.session.load_state()) {
            println!("{}", line);
        }
    }
}
