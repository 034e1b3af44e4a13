use crate::deck::DeckKind;
use crate::table::{max_players, TableConfig};

use super::{AppState, Scene};

#[derive(Debug, Clone, Copy)]
enum MenuItem {
    Players,
    Deck,
    Seed,
}

const MENU_ITEMS: [MenuItem; 3] = [MenuItem::Players, MenuItem::Deck, MenuItem::Seed];

impl MenuItem {
    fn display(self, app: &AppState) -> String {
        match self {
            MenuItem::Players => format!(
                "Players: {} (max {})",
                app.cfg_players,
                max_players(app.cfg_deck.size())
            ),
            MenuItem::Deck => format!("Deck: {} ({} cards)", app.cfg_deck, app.cfg_deck.size()),
            MenuItem::Seed => match app.cfg_seed {
                Some(seed) => format!("Seed: {seed}"),
                None => "Seed: random".to_string(),
            },
        }
    }

    fn inc(self, app: &mut AppState) {
        match self {
            MenuItem::Players => {
                if app.cfg_players < max_players(app.cfg_deck.size()) {
                    app.cfg_players += 1;
                }
            }
            MenuItem::Deck => app.toggle_cfg_deck(),
            MenuItem::Seed => {
                app.cfg_seed = Some(app.cfg_seed.map_or(0, |s| s.saturating_add(1)));
            }
        }
    }

    fn dec(self, app: &mut AppState) {
        match self {
            MenuItem::Players => {
                if app.cfg_players > 1 {
                    app.cfg_players -= 1;
                }
            }
            MenuItem::Deck => app.toggle_cfg_deck(),
            MenuItem::Seed => {
                app.cfg_seed = app.cfg_seed.and_then(|s| s.checked_sub(1));
            }
        }
    }
}

impl AppState {
    pub fn menu_items_display(&self) -> Vec<String> {
        MENU_ITEMS.iter().map(|item| item.display(self)).collect()
    }

    pub fn toggle_menu(&mut self) {
        self.close_help();
        match self.scene {
            Scene::Menu => self.scene = Scene::Table,
            _ => self.open_menu(),
        }
    }

    // --- Menu operations ---
    pub fn open_menu(&mut self) {
        self.close_help();
        self.menu_index = 0;
        self.cfg_players = self.config.players;
        self.cfg_deck = self.config.deck;
        self.cfg_seed = self.config.seed;
        self.scene = Scene::Menu;
    }

    pub fn apply_menu(&mut self) {
        let max = max_players(self.cfg_deck.size());
        self.cfg_players = self.cfg_players.clamp(1, max);
        self.config = TableConfig { players: self.cfg_players, deck: self.cfg_deck, seed: self.cfg_seed };
        self.reset_table();
        self.scene = Scene::Table;
    }

    pub fn cancel_menu(&mut self) {
        self.scene = Scene::Table;
    }

    pub fn menu_next(&mut self) {
        self.menu_index = (self.menu_index + 1) % MENU_ITEMS.len();
    }

    pub fn menu_prev(&mut self) {
        self.menu_index = (self.menu_index + MENU_ITEMS.len() - 1) % MENU_ITEMS.len();
    }

    pub fn menu_inc(&mut self) {
        let item = MENU_ITEMS[self.menu_index % MENU_ITEMS.len()];
        item.inc(self);
    }

    pub fn menu_dec(&mut self) {
        let item = MENU_ITEMS[self.menu_index % MENU_ITEMS.len()];
        item.dec(self);
    }

    fn toggle_cfg_deck(&mut self) {
        self.cfg_deck = match self.cfg_deck {
            DeckKind::Standard => DeckKind::Extended,
            DeckKind::Extended => DeckKind::Standard,
        };
        // a smaller deck seats fewer players
        self.cfg_players = self.cfg_players.min(max_players(self.cfg_deck.size()));
    }
}
