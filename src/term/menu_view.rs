//! Profile selection and main menu screens
//!
//! Pure rendering, same contract as the game view: state in, screen out.

use crossterm::style::Color;

use crate::profile::PlayerProfile;
use crate::term::game_view::Viewport;
use crate::term::screen::{Screen, Style};
use crate::types::Rect;

/// In-progress profile creation input.
#[derive(Debug, Default, Clone)]
pub struct ProfileForm {
    pub name: String,
    pub age: String,
}

impl ProfileForm {
    /// The form is submittable once it has a name and a plausible age.
    pub fn parsed_age(&self) -> Option<u8> {
        if self.name.trim().is_empty() {
            return None;
        }
        self.age.parse::<u8>().ok().filter(|age| (2..=12).contains(age))
    }
}

fn avatar_color(name: &str) -> Color {
    match name {
        "red" => Color::Red,
        "blue" => Color::Blue,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        _ => Color::White,
    }
}

#[derive(Debug, Default)]
pub struct MenuView;

impl MenuView {
    pub fn new() -> Self {
        Self
    }

    /// Profile picker: existing profiles plus a "new profile" row, with an
    /// optional creation form below.
    pub fn render_profiles(
        &self,
        profiles: &[PlayerProfile],
        selected: usize,
        form: Option<&ProfileForm>,
        viewport: Viewport,
    ) -> Screen {
        let mut screen = Screen::new(viewport.width, viewport.height);
        screen.put_centered(0, 1, viewport.width, "Who's playing?", Style::fg(Color::Cyan).bold());

        let mut y = 3;
        for (i, profile) in profiles.iter().enumerate() {
            let marker = if i == selected { "> " } else { "  " };
            let style = if i == selected {
                Style::fg(Color::Yellow).bold()
            } else {
                Style::default()
            };
            screen.put_str(4, y, marker, style);
            screen.put_char(6, y, '●', Style::fg(avatar_color(&profile.avatar_color)));
            screen.put_str(
                8,
                y,
                &format!("{} ({})", profile.name, profile.tier().label()),
                style,
            );
            y += 1;
        }

        let new_row = profiles.len();
        let style = if selected == new_row {
            Style::fg(Color::Yellow).bold()
        } else {
            Style::default()
        };
        screen.put_str(4, y, if selected == new_row { "> " } else { "  " }, style);
        screen.put_str(6, y, "+ New profile", style);
        y += 2;

        if let Some(form) = form {
            screen.put_str(4, y, &format!("Name: {}_", form.name), Style::default());
            screen.put_str(4, y + 1, &format!("Age:  {}_", form.age), Style::default());
            let hint = if form.parsed_age().is_some() {
                "enter to create"
            } else {
                "type a name and an age from 2 to 12"
            };
            screen.put_str(4, y + 3, hint, Style::default().dim());
        } else {
            screen.put_str(
                4,
                y,
                "up/down select   enter confirm   q quit",
                Style::default().dim(),
            );
        }
        screen
    }

    /// Main menu for a chosen profile, with their lifetime stats.
    pub fn render_menu(&self, profile: &PlayerProfile, selected: usize, viewport: Viewport) -> Screen {
        let mut screen = Screen::new(viewport.width, viewport.height);

        screen.put_centered(
            0,
            1,
            viewport.width,
            &format!("Hi {}!", profile.name),
            Style::fg(avatar_color(&profile.avatar_color)).bold(),
        );
        screen.put_centered(0, 2, viewport.width, profile.tier().label(), Style::default().dim());

        let items = ["Play: Match the Verse", "Switch profile", "Quit"];
        for (i, item) in items.iter().enumerate() {
            let style = if i == selected {
                Style::fg(Color::Yellow).bold()
            } else {
                Style::default()
            };
            let marker = if i == selected { "> " } else { "  " };
            screen.put_str(6, 5 + i as u16 * 2, &format!("{marker}{item}"), style);
        }
        // Not selectable yet.
        for (i, item) in ["Memory Cards - coming soon", "Verse Quiz - coming soon"]
            .iter()
            .enumerate()
        {
            screen.put_str(8, 11 + i as u16, item, Style::default().dim());
        }

        let stats = &profile.stats;
        let box_y = 14;
        let rect = Rect::new(4, box_y, viewport.width.saturating_sub(8).min(40), 6);
        screen.draw_box(rect, Style::fg(Color::DarkGrey));
        screen.put_str(rect.x + 2, box_y, " Stats ", Style::default().dim());
        screen.put_str(
            rect.x + 2,
            box_y + 1,
            &format!("Games played: {}", stats.games_played),
            Style::default(),
        );
        screen.put_str(
            rect.x + 2,
            box_y + 2,
            &format!("Total score:  {}", stats.total_score),
            Style::default(),
        );
        let best = match stats.best_time {
            Some(seconds) => crate::core::scoring::format_time(seconds),
            None => "-".to_string(),
        };
        screen.put_str(rect.x + 2, box_y + 3, &format!("Best time:    {best}"), Style::default());
        screen.put_str(
            rect.x + 2,
            box_y + 4,
            &format!("Average:      {}", profile.average_score()),
            Style::default(),
        );
        screen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Viewport {
        Viewport::new(80, 24)
    }

    #[test]
    fn test_form_validation() {
        let mut form = ProfileForm::default();
        assert_eq!(form.parsed_age(), None);

        form.name = "Lily".to_string();
        form.age = "4".to_string();
        assert_eq!(form.parsed_age(), Some(4));

        form.age = "40".to_string();
        assert_eq!(form.parsed_age(), None);

        form.age = "7".to_string();
        form.name = "  ".to_string();
        assert_eq!(form.parsed_age(), None);
    }

    #[test]
    fn test_profiles_screen_lists_names() {
        let view = MenuView::new();
        let profiles = vec![
            PlayerProfile::new("Lily", 4, "red"),
            PlayerProfile::new("Noah", 9, "blue"),
        ];
        let screen = view.render_profiles(&profiles, 0, None, viewport());

        let all: String = (0..screen.height())
            .map(|y| screen.row_text(y))
            .collect::<Vec<_>>()
            .join("\n");
        assert!(all.contains("Lily"));
        assert!(all.contains("Noah"));
        assert!(all.contains("+ New profile"));
    }

    #[test]
    fn test_menu_screen_shows_stats() {
        let view = MenuView::new();
        let mut profile = PlayerProfile::new("Ava", 6, "green");
        profile.stats.games_played = 2;
        profile.stats.total_score = 280;
        profile.stats.best_time = Some(75);

        let screen = view.render_menu(&profile, 0, viewport());
        let all: String = (0..screen.height())
            .map(|y| screen.row_text(y))
            .collect::<Vec<_>>()
            .join("\n");
        assert!(all.contains("Hi Ava!"));
        assert!(all.contains("Games played: 2"));
        assert!(all.contains("Best time:    1:15"));
    }
}
