//! Application state machine
//!
//! Routes keyboard and mouse events to whichever screen is active and
//! owns the pieces that outlive a single screen: the profile list, its
//! store, and the RNG that seeds new rounds. Pure with respect to the
//! terminal; the main loop feeds it events and asks it to render.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};

use crate::core::rng::SimpleRng;
use crate::core::round::MatchOutcome;
use crate::engine::RoundController;
use crate::input::DragTracker;
use crate::profile::{PlayerProfile, ProfileStore, AVATAR_COLORS};
use crate::term::menu_view::ProfileForm;
use crate::term::{GameView, MenuView, Screen, Viewport};
use crate::types::{Point, FLASH_MS};

/// Which creation-form field receives typed characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FormFocus {
    Name,
    Age,
}

enum AppScreen {
    Profiles {
        selected: usize,
        form: Option<(ProfileForm, FormFocus)>,
    },
    Menu {
        profile_idx: usize,
        selected: usize,
    },
    Game(GameScreen),
}

struct GameScreen {
    profile_idx: usize,
    controller: RoundController,
    tracker: DragTracker,
    scroll: u16,
    /// Feedback banner and its remaining display time in ms.
    flash: Option<(String, u32)>,
}

pub struct App {
    store: ProfileStore,
    profiles: Vec<PlayerProfile>,
    screen: AppScreen,
    seed_rng: SimpleRng,
    game_view: GameView,
    menu_view: MenuView,
    should_quit: bool,
}

impl App {
    pub fn new(store: ProfileStore) -> Self {
        Self::with_rng(store, SimpleRng::from_clock())
    }

    pub fn with_rng(store: ProfileStore, seed_rng: SimpleRng) -> Self {
        let profiles = store.load();
        Self {
            store,
            profiles,
            screen: AppScreen::Profiles {
                selected: 0,
                form: None,
            },
            seed_rng,
            game_view: GameView::new(),
            menu_view: MenuView::new(),
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn profiles(&self) -> &[PlayerProfile] {
        &self.profiles
    }

    /// Advance time-based state: the round clock and the flash banner.
    pub fn tick(&mut self, elapsed_ms: u32) {
        if let AppScreen::Game(game) = &mut self.screen {
            game.controller.tick(elapsed_ms);
            if let Some((_, remaining)) = &mut game.flash {
                *remaining = remaining.saturating_sub(elapsed_ms);
                if *remaining == 0 {
                    game.flash = None;
                }
            }
        }
    }

    pub fn render(&self, viewport: Viewport) -> Screen {
        match &self.screen {
            AppScreen::Profiles { selected, form } => self.menu_view.render_profiles(
                &self.profiles,
                *selected,
                form.as_ref().map(|(f, _)| f),
                viewport,
            ),
            AppScreen::Menu {
                profile_idx,
                selected,
            } => self
                .menu_view
                .render_menu(&self.profiles[*profile_idx], *selected, viewport),
            AppScreen::Game(game) => {
                let round = game.controller.round();
                self.game_view.render(
                    round,
                    viewport,
                    game.scroll,
                    game.tracker.session(),
                    game.flash.as_ref().map(|(m, _)| m.as_str()),
                )
            }
        }
    }

    /// Abandon any in-flight gesture. Called on focus loss; the grabbed
    /// card snaps home and no match is proposed.
    pub fn handle_focus_lost(&mut self) {
        if let AppScreen::Game(game) = &mut self.screen {
            game.tracker.cancel();
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        match &mut self.screen {
            AppScreen::Profiles { selected, form } => {
                let rows = self.profiles.len() + 1;
                match form {
                    Some((f, focus)) => match key.code {
                        KeyCode::Esc => *form = None,
                        KeyCode::Backspace => {
                            match focus {
                                FormFocus::Name => f.name.pop(),
                                FormFocus::Age => f.age.pop(),
                            };
                        }
                        KeyCode::Tab => {
                            *focus = match focus {
                                FormFocus::Name => FormFocus::Age,
                                FormFocus::Age => FormFocus::Name,
                            };
                        }
                        KeyCode::Enter => match focus {
                            FormFocus::Name => *focus = FormFocus::Age,
                            FormFocus::Age => {
                                if let Some(age) = f.parsed_age() {
                                    let color =
                                        AVATAR_COLORS[self.profiles.len() % AVATAR_COLORS.len()];
                                    let profile =
                                        PlayerProfile::new(f.name.trim(), age, color);
                                    self.store.upsert(&mut self.profiles, profile)?;
                                    let idx = self.profiles.len() - 1;
                                    self.screen = AppScreen::Menu {
                                        profile_idx: idx,
                                        selected: 0,
                                    };
                                }
                            }
                        },
                        KeyCode::Char(c) => match focus {
                            FormFocus::Name => {
                                if f.name.chars().count() < 16 {
                                    f.name.push(c);
                                }
                            }
                            FormFocus::Age => {
                                if c.is_ascii_digit() && f.age.chars().count() < 2 {
                                    f.age.push(c);
                                }
                            }
                        },
                        _ => {}
                    },
                    None => match key.code {
                        KeyCode::Up => *selected = selected.saturating_sub(1),
                        KeyCode::Down => *selected = (*selected + 1).min(rows - 1),
                        KeyCode::Enter => {
                            if *selected < self.profiles.len() {
                                self.screen = AppScreen::Menu {
                                    profile_idx: *selected,
                                    selected: 0,
                                };
                            } else {
                                *form = Some((ProfileForm::default(), FormFocus::Name));
                            }
                        }
                        KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                        _ => {}
                    },
                }
            }
            AppScreen::Menu {
                profile_idx,
                selected,
            } => match key.code {
                KeyCode::Up => *selected = selected.saturating_sub(1),
                KeyCode::Down => *selected = (*selected + 1).min(2),
                KeyCode::Esc => {
                    self.screen = AppScreen::Profiles {
                        selected: *profile_idx,
                        form: None,
                    };
                }
                KeyCode::Enter => match *selected {
                    0 => {
                        let idx = *profile_idx;
                        self.start_round(idx);
                    }
                    1 => {
                        self.screen = AppScreen::Profiles {
                            selected: *profile_idx,
                            form: None,
                        };
                    }
                    _ => self.should_quit = true,
                },
                KeyCode::Char('q') => self.should_quit = true,
                _ => {}
            },
            AppScreen::Game(game) => match key.code {
                KeyCode::Char('r') => {
                    game.tracker.cancel();
                    game.controller.restart();
                    game.scroll = 0;
                    game.flash = None;
                }
                KeyCode::Esc => {
                    game.tracker.cancel();
                    game.controller.teardown();
                    let idx = game.profile_idx;
                    self.screen = AppScreen::Menu {
                        profile_idx: idx,
                        selected: 0,
                    };
                }
                _ => {}
            },
        }
        Ok(())
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent, viewport: Viewport) -> Result<()> {
        let AppScreen::Game(game) = &mut self.screen else {
            return Ok(());
        };
        let at = Point::new(mouse.column, mouse.row);
        let view = &self.game_view;

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let round = game.controller.round();
                let layout = view.layout(round, viewport, game.scroll);
                if let Some(id) = layout.card_at(at) {
                    game.tracker.grab(id, at, round.is_matched(id));
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                let region = view.scroll_region(game.controller.round(), viewport, game.scroll);
                if let Some(update) = game.tracker.update(at, region) {
                    if let Some(scroll) = update.scroll_to {
                        game.scroll = scroll;
                    }
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                if let Some(proposal) = game.tracker.release(at) {
                    // Hit-test against the layout as it stands now, after
                    // any edge scrolling during the drag.
                    let layout =
                        view.layout(game.controller.round(), viewport, game.scroll);
                    let profile = self.profiles.get(game.profile_idx);
                    let (outcome, updated) =
                        game.controller
                            .resolve_drop(proposal.item, proposal.at, &layout, profile);
                    if outcome == MatchOutcome::Rejected {
                        game.flash = Some(("Try again!".to_string(), FLASH_MS));
                    }
                    if let Some(updated) = updated {
                        self.store.upsert(&mut self.profiles, updated)?;
                    }
                }
            }
            MouseEventKind::ScrollDown => {
                if !game.tracker.scroll_locked() {
                    let max = view.max_scroll(game.controller.round(), viewport);
                    game.scroll = game.scroll.saturating_add(1).min(max);
                }
            }
            MouseEventKind::ScrollUp => {
                if !game.tracker.scroll_locked() {
                    game.scroll = game.scroll.saturating_sub(1);
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn start_round(&mut self, profile_idx: usize) {
        let tier = self.profiles[profile_idx].tier();
        let seed = self.seed_rng.next_u32();
        self.screen = AppScreen::Game(GameScreen {
            profile_idx,
            controller: RoundController::new(tier, seed),
            tracker: DragTracker::new(),
            scroll: 0,
            flash: None,
        });
    }
}
