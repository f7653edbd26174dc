//! Story flow - the state machine that walks players from the menu, through
//! the intro and character creation, into gameplay.
//!
//! The machine is driven by [`Input`]s, each one a UI control firing. It reads
//! dialogue from a [`Script`], and touches game state only through the
//! [`GameFacade`].

mod script;

pub use script::*;

use tracing::{debug, info, warn};

use crate::config::GameConfig;
use crate::facade::GameFacade;
use game_rules::{can_submit_name, LevelProgression, MoralityChoice, PlayerSlot, MAX_NAME_LEN};

/// Phases of the story. The machine starts in [`NarrativePhase::Menu`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NarrativePhase {
    #[default]
    Menu,
    SaveChoice,
    Settings,
    Intro,
    Level0Dialogue,
    MoralityChoice,
    WorldMap,
    Gameplay,
}

/// A UI control firing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Start,
    OpenSettings,
    /// Leave the game, from anywhere.
    Quit,
    NewGame,
    LoadGame,
    /// Advance the current dialogue.
    Next,
    TypeChar(char),
    Backspace,
    SubmitName,
    ChooseMorality(Option<MoralityChoice>),
    Back,
    ResetSave,
    NextLevel,
}

/// What the control loop should do after an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Continue,
    Exit,
}

/// Ephemeral UI-flow state. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NarrativeState {
    pub phase: NarrativePhase,
    /// Cursor into the current phase's lines.
    pub read_index: usize,
    pub current_name: String,
    pub active_slot: PlayerSlot,
    pub name_entry_active: bool,
}

impl Default for NarrativeState {
    fn default() -> Self {
        Self {
            phase: NarrativePhase::Menu,
            read_index: 0,
            current_name: String::new(),
            active_slot: PlayerSlot::Player1,
            name_entry_active: false,
        }
    }
}

/// The narrative state machine.
#[derive(Debug)]
pub struct StoryController {
    state: NarrativeState,
    script: Script,
    facade: GameFacade,
    levels: LevelProgression,
}

impl StoryController {
    pub fn new(script: Script, facade: GameFacade, levels: LevelProgression) -> Self {
        Self {
            state: NarrativeState::default(),
            script,
            facade,
            levels,
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(
            config.script.clone(),
            GameFacade::from_config(config),
            config.level_progression(),
        )
    }

    pub fn state(&self) -> &NarrativeState {
        &self.state
    }

    pub fn phase(&self) -> NarrativePhase {
        self.state.phase
    }

    pub fn facade(&self) -> &GameFacade {
        &self.facade
    }

    pub fn facade_mut(&mut self) -> &mut GameFacade {
        &mut self.facade
    }

    pub fn levels(&self) -> &LevelProgression {
        &self.levels
    }

    /// Line at the read cursor, for phases that show dialogue.
    pub fn current_line(&self) -> Option<&str> {
        let lines = match self.state.phase {
            NarrativePhase::Intro => &self.script.intro,
            NarrativePhase::Level0Dialogue => &self.script.level0,
            _ => return None,
        };
        lines.get(self.state.read_index).map(String::as_str)
    }

    /// Feed one input to the machine.
    pub fn advance(&mut self, input: Input) -> Step {
        if input == Input::Quit {
            info!(phase = ?self.state.phase, "quit requested");
            return Step::Exit;
        }

        match self.state.phase {
            NarrativePhase::Menu => self.on_menu(input),
            NarrativePhase::SaveChoice => self.on_save_choice(input),
            NarrativePhase::Settings => self.on_settings(input),
            NarrativePhase::Intro => self.on_intro(input),
            NarrativePhase::Level0Dialogue => self.on_level0(input),
            NarrativePhase::MoralityChoice => self.on_morality(input),
            NarrativePhase::WorldMap => self.on_world_map(),
            NarrativePhase::Gameplay => self.on_gameplay(input),
        }
        Step::Continue
    }

    fn enter(&mut self, phase: NarrativePhase) {
        debug!(from = ?self.state.phase, to = ?phase, "phase change");
        self.state.phase = phase;
    }

    fn on_menu(&mut self, input: Input) {
        match input {
            Input::Start => self.enter(NarrativePhase::SaveChoice),
            Input::OpenSettings => self.enter(NarrativePhase::Settings),
            _ => {}
        }
    }

    fn on_save_choice(&mut self, input: Input) {
        match input {
            Input::NewGame => {
                self.state.active_slot = PlayerSlot::Player1;
                self.state.current_name.clear();
                self.state.name_entry_active = false;
                self.enter_intro();
            }
            Input::LoadGame => {
                if self.facade.save_exists() && self.facade.load_from_disk() {
                    self.levels.jump_to(self.facade.session().level_index);
                    self.enter(NarrativePhase::Gameplay);
                } else {
                    warn!("no loadable save, staying on save choice");
                }
            }
            Input::Back => self.enter(NarrativePhase::Menu),
            _ => {}
        }
    }

    fn on_settings(&mut self, input: Input) {
        match input {
            Input::Back => self.enter(NarrativePhase::Menu),
            Input::ResetSave => {
                self.facade.reset_session();
            }
            _ => {}
        }
    }

    fn enter_intro(&mut self) {
        self.state.read_index = 0;
        if self.script.intro.is_empty() {
            self.enter_level0();
        } else {
            self.enter(NarrativePhase::Intro);
        }
    }

    fn enter_level0(&mut self) {
        self.state.read_index = 0;
        self.state.name_entry_active = self.script.level0.len() <= 1;
        self.enter(NarrativePhase::Level0Dialogue);
    }

    fn on_intro(&mut self, input: Input) {
        if input != Input::Next {
            return;
        }
        if self.state.read_index + 1 < self.script.intro.len() {
            self.state.read_index += 1;
        } else {
            self.enter_level0();
        }
    }

    fn on_level0(&mut self, input: Input) {
        if !self.state.name_entry_active {
            if input == Input::Next {
                if self.state.read_index + 1 < self.script.level0.len() {
                    self.state.read_index += 1;
                } else {
                    self.state.name_entry_active = true;
                }
            }
            return;
        }

        match input {
            Input::TypeChar(c) if !c.is_control() => {
                if self.state.current_name.chars().count() < MAX_NAME_LEN {
                    self.state.current_name.push(c);
                }
            }
            Input::Backspace => {
                self.state.current_name.pop();
            }
            Input::SubmitName => {
                if can_submit_name(&self.state.current_name) {
                    self.state.name_entry_active = false;
                    self.enter(NarrativePhase::MoralityChoice);
                } else {
                    warn!(name = %self.state.current_name, "name too short to submit");
                }
            }
            Input::Next => {
                warn!("dialogue already at the name prompt");
            }
            _ => {}
        }
    }

    fn on_morality(&mut self, input: Input) {
        let Input::ChooseMorality(choice) = input else {
            return;
        };

        let slot = self.state.active_slot;
        self.facade
            .create_full_character(slot, &self.state.current_name, choice);

        match slot {
            PlayerSlot::Player1 => {
                self.state.active_slot = PlayerSlot::Player2;
                self.state.current_name.clear();
                self.state.read_index = self.script.name_entry_index();
                self.state.name_entry_active = true;
                self.enter(NarrativePhase::Level0Dialogue);
            }
            PlayerSlot::Player2 => self.enter(NarrativePhase::WorldMap),
        }
    }

    fn on_world_map(&mut self) {
        self.levels.reset();
        self.facade.set_level_index(self.levels.level_number());
        self.enter(NarrativePhase::Gameplay);
    }

    fn on_gameplay(&mut self, input: Input) {
        if input != Input::NextLevel {
            return;
        }
        if self.levels.advance() {
            self.facade.set_level_index(self.levels.level_number());
            info!(level = ?self.levels.current(), "level advanced");
        } else {
            info!("already on the last level");
        }
    }
}
