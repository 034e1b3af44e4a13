use crate::deck::DeckKind;
use crate::showdown::Showdown;
use crate::table::{Deal, TableConfig};
use log::warn;
use rand_chacha::ChaCha8Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Scene {
    Menu,
    Table,
}

/// High-level input actions for the TUI controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum InputAction {
    MenuNext,
    MenuPrev,
    MenuInc,
    MenuDec,
    MenuApply,
    MenuCancel,
    ToggleMenu,
    ToggleHelp,
    NewHand,
    FocusNext,
    FocusPrev,
    FocusSeat(usize),
}

#[derive(Debug)]
#[non_exhaustive]
pub struct AppState {
    pub scene: Scene,
    pub config: TableConfig,
    // UI focus seat index
    pub focus: usize,
    pub hands_dealt: u64,
    // Menu config being edited
    pub menu_index: usize,
    pub cfg_players: usize,
    pub cfg_deck: DeckKind,
    pub cfg_seed: Option<u64>,
    rng: ChaCha8Rng,
    deal: Option<Deal>,
    showdown: Option<Showdown>,
    help_open: bool,
    error: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(TableConfig::default())
    }
}

impl AppState {
    pub fn new(config: TableConfig) -> Self {
        Self {
            scene: Scene::Menu,
            config,
            focus: 0,
            hands_dealt: 0,
            menu_index: 0,
            cfg_players: config.players,
            cfg_deck: config.deck,
            cfg_seed: config.seed,
            rng: config.rng(),
            deal: None,
            showdown: None,
            help_open: false,
            error: None,
        }
    }

    /// Apply an input; returns true when the state changed.
    pub fn handle_input(&mut self, action: InputAction) -> bool {
        match action {
            InputAction::MenuNext => self.menu_next(),
            InputAction::MenuPrev => self.menu_prev(),
            InputAction::MenuInc => self.menu_inc(),
            InputAction::MenuDec => self.menu_dec(),
            InputAction::MenuApply => self.apply_menu(),
            InputAction::MenuCancel => self.cancel_menu(),
            InputAction::ToggleMenu => self.toggle_menu(),
            InputAction::ToggleHelp => self.help_open = !self.help_open,
            InputAction::NewHand => return self.new_hand(),
            InputAction::FocusNext => self.focus_step(1),
            InputAction::FocusPrev => self.focus_step(self.seats().saturating_sub(1)),
            InputAction::FocusSeat(seat) => {
                if seat >= self.seats() {
                    return false;
                }
                self.focus = seat;
            }
        }
        true
    }

    /// Shuffle and deal the next hand, then run the showdown.
    pub fn new_hand(&mut self) -> bool {
        if self.scene != Scene::Table {
            return false;
        }
        let result = self
            .config
            .deal_with(&mut self.rng)
            .map_err(|e| e.to_string())
            .and_then(|deal| deal.showdown().map(|sd| (deal, sd)).map_err(|e| e.to_string()));
        match result {
            Ok((deal, showdown)) => {
                self.deal = Some(deal);
                self.showdown = Some(showdown);
                self.hands_dealt += 1;
                self.error = None;
                true
            }
            Err(err) => {
                warn!("deal failed: {err}");
                self.error = Some(err);
                false
            }
        }
    }

    pub fn deal(&self) -> Option<&Deal> {
        self.deal.as_ref()
    }

    pub fn showdown(&self) -> Option<&Showdown> {
        self.showdown.as_ref()
    }

    pub fn seats(&self) -> usize {
        self.config.players
    }

    pub fn help_open(&self) -> bool {
        self.help_open
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub(crate) fn close_help(&mut self) {
        self.help_open = false;
    }

    pub(crate) fn reset_table(&mut self) {
        self.rng = self.config.rng();
        self.deal = None;
        self.showdown = None;
        self.hands_dealt = 0;
        self.focus = 0;
        self.error = None;
    }

    fn focus_step(&mut self, step: usize) {
        let n = self.seats().max(1);
        self.focus = (self.focus + step) % n;
    }
}
