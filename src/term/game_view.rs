//! GameView: maps a [`RoundState`] onto the terminal
//!
//! Pure, no I/O. The same card geometry feeds both rendering and the hit
//! test registry, so a drop is always resolved against exactly what the
//! player saw on the frame they released.
//!
//! Verse cards stack in the left column, reference cards in the right.
//! Tall boards scroll; the header and footer stay fixed.

use crossterm::style::Color;

use crate::core::layout::CardLayout;
use crate::core::round::RoundState;
use crate::core::scoring::format_time;
use crate::input::drag::{DragSession, ViewRegion};
use crate::term::screen::{Screen, Style};
use crate::types::{CardId, CardKind, Rect};

/// Rows reserved above the scrolling card area.
const HEADER_HEIGHT: u16 = 3;
/// Rows reserved below it for the status line.
const FOOTER_HEIGHT: u16 = 1;
/// Blank rows between stacked cards.
const CARD_GAP: u16 = 1;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Greedy word wrap. Words longer than the width are hard-split.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![String::new()];
    }
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        let mut word = word;
        while word.chars().count() > width {
            if !line.is_empty() {
                lines.push(std::mem::take(&mut line));
            }
            let split: String = word.chars().take(width).collect();
            word = &word[split.len()..];
            lines.push(split);
        }
        let need = word.chars().count() + if line.is_empty() { 0 } else { 1 };
        if line.chars().count() + need > width && !line.is_empty() {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

#[derive(Debug, Default)]
pub struct GameView;

impl GameView {
    pub fn new() -> Self {
        Self
    }

    /// The scrollable card area in screen coordinates.
    pub fn body_region(&self, viewport: Viewport) -> Rect {
        let height = viewport
            .height
            .saturating_sub(HEADER_HEIGHT + FOOTER_HEIGHT);
        Rect::new(0, HEADER_HEIGHT, viewport.width, height)
    }

    fn column_width(&self, viewport: Viewport) -> u16 {
        // One cell of margin on each side, two between the columns.
        viewport.width.saturating_sub(4) / 2
    }

    /// Card rectangles in content space (y = 0 at the top of the first
    /// card, unaffected by scrolling).
    fn frames(&self, round: &RoundState, viewport: Viewport) -> Vec<(CardId, Rect)> {
        let col_w = self.column_width(viewport);
        let ref_x = 1 + col_w + 2;
        let text_w = col_w.saturating_sub(2) as usize;

        let mut frames = Vec::new();
        let mut vy = 0u16;
        for verse in round.verses() {
            let height = wrap(&verse.text, text_w).len() as u16 + 2;
            frames.push((verse.id, Rect::new(1, vy, col_w, height)));
            vy += height + CARD_GAP;
        }
        let mut ry = 0u16;
        for reference in round.references() {
            frames.push((reference.id, Rect::new(ref_x, ry, col_w, 3)));
            ry += 3 + CARD_GAP;
        }
        frames
    }

    pub fn content_height(&self, round: &RoundState, viewport: Viewport) -> u16 {
        self.frames(round, viewport)
            .iter()
            .map(|(_, rect)| rect.bottom())
            .max()
            .unwrap_or(0)
    }

    pub fn max_scroll(&self, round: &RoundState, viewport: Viewport) -> u16 {
        self.content_height(round, viewport)
            .saturating_sub(self.body_region(viewport).height)
    }

    /// The viewport description the drag tracker needs for edge scrolling.
    pub fn scroll_region(&self, round: &RoundState, viewport: Viewport, scroll: u16) -> ViewRegion {
        let body = self.body_region(viewport);
        ViewRegion {
            top: body.y,
            bottom: body.bottom(),
            scroll,
            max_scroll: self.max_scroll(round, viewport),
        }
    }

    /// Screen-space bounds of every card visible at this scroll offset.
    /// Partially visible cards are clipped to the body region.
    pub fn layout(&self, round: &RoundState, viewport: Viewport, scroll: u16) -> CardLayout {
        let body = self.body_region(viewport);
        let mut layout = CardLayout::new();
        for (id, frame) in self.frames(round, viewport) {
            if let Some(rect) = clip_to_body(frame, scroll, body) {
                layout.insert(id, rect);
            }
        }
        layout
    }

    /// Render one frame of the game screen.
    pub fn render(
        &self,
        round: &RoundState,
        viewport: Viewport,
        scroll: u16,
        session: Option<&DragSession>,
        flash: Option<&str>,
    ) -> Screen {
        let mut screen = Screen::new(viewport.width, viewport.height);
        let body = self.body_region(viewport);

        self.render_header(&mut screen, round, viewport);

        // Cards are drawn into content space, then the visible window is
        // copied under the header. This keeps partially scrolled cards
        // cheap to clip.
        let content_h = self.content_height(round, viewport).max(1);
        let mut content = Screen::new(viewport.width, content_h);
        let dragging = session.map(|s| s.item());
        for (id, frame) in self.frames(round, viewport) {
            self.render_card(&mut content, round, id, frame, dragging == Some(id));
        }
        for row in 0..body.height {
            let src_y = scroll + row;
            if src_y >= content_h {
                break;
            }
            for x in 0..viewport.width {
                if let Some(cell) = content.get(x, src_y) {
                    screen.put_char(x, body.y + row, cell.ch, cell.style);
                }
            }
        }

        if let Some(session) = session {
            self.render_drag_label(&mut screen, round, session);
        }
        if round.completed() {
            self.render_completion(&mut screen, round, viewport);
        }
        self.render_footer(&mut screen, viewport, flash);
        screen
    }

    fn render_header(&self, screen: &mut Screen, round: &RoundState, viewport: Viewport) {
        let title = Style::fg(Color::Cyan).bold();
        screen.put_str(1, 0, "VerseMatch", title);

        let status = format!(
            "Score: {}   Time: {}",
            round.score(),
            format_time(round.elapsed_seconds())
        );
        let x = viewport.width.saturating_sub(status.chars().count() as u16 + 1);
        screen.put_str(x, 0, &status, Style::default());

        let (done, total) = round.progress();
        screen.put_str(1, 1, &format!("Matched {done}/{total}"), Style::default());
        let bar_x = 16u16;
        let bar_w = viewport.width.saturating_sub(bar_x + 1);
        if bar_w > 0 && total > 0 {
            let filled = (bar_w as usize * done / total) as u16;
            for i in 0..bar_w {
                let (ch, style) = if i < filled {
                    ('█', Style::fg(Color::Green))
                } else {
                    ('░', Style::fg(Color::DarkGrey))
                };
                screen.put_char(bar_x + i, 1, ch, style);
            }
        }
        for x in 0..viewport.width {
            screen.put_char(x, 2, '─', Style::fg(Color::DarkGrey));
        }
    }

    fn render_card(
        &self,
        content: &mut Screen,
        round: &RoundState,
        id: CardId,
        frame: Rect,
        dragged: bool,
    ) {
        let matched = round.is_matched(id);
        let border = if dragged {
            Style::fg(Color::Yellow).bold()
        } else if matched {
            Style::fg(Color::Green).dim()
        } else {
            match id.kind {
                CardKind::Verse => Style::fg(Color::Cyan),
                CardKind::Reference => Style::fg(Color::Magenta),
            }
        };
        content.draw_box(frame, border);
        if matched {
            content.put_str(frame.x + 2, frame.y, "✓", Style::fg(Color::Green).bold());
        }

        let text_style = if matched {
            Style::default().dim()
        } else {
            Style::default()
        };
        let text_w = frame.width.saturating_sub(2) as usize;
        match id.kind {
            CardKind::Verse => {
                if let Some(verse) = round.verses().iter().find(|v| v.id == id) {
                    for (i, line) in wrap(&verse.text, text_w).iter().enumerate() {
                        content.put_str(frame.x + 1, frame.y + 1 + i as u16, line, text_style);
                    }
                }
            }
            CardKind::Reference => {
                if let Some(reference) = round.references().iter().find(|r| r.id == id) {
                    content.put_centered(
                        frame.x + 1,
                        frame.y + 1,
                        frame.width.saturating_sub(2),
                        &reference.reference,
                        text_style.bold(),
                    );
                }
            }
        }
    }

    /// Floating label following the pointer while a card is in flight.
    fn render_drag_label(&self, screen: &mut Screen, round: &RoundState, session: &DragSession) {
        let id = session.item();
        let label = match id.kind {
            CardKind::Verse => round
                .verses()
                .iter()
                .find(|v| v.id == id)
                .map(|v| truncated(&v.text, 24)),
            CardKind::Reference => round
                .references()
                .iter()
                .find(|r| r.id == id)
                .map(|r| r.reference.clone()),
        };
        if let Some(label) = label {
            let at = session.position();
            let style = Style {
                fg: Color::Black,
                bg: Color::Yellow,
                bold: true,
                dim: false,
            };
            let y = at.y.saturating_sub(1);
            screen.put_str(at.x.saturating_add(1), y, &format!(" {label} "), style);
        }
    }

    fn render_completion(&self, screen: &mut Screen, round: &RoundState, viewport: Viewport) {
        let lines = [
            "Round Complete!".to_string(),
            format!("Score: {}", round.score()),
            format!("Time: {}", format_time(round.elapsed_seconds())),
            "Press r to play again".to_string(),
        ];
        let box_w = 30u16.min(viewport.width);
        let box_h = lines.len() as u16 + 2;
        let x = viewport.width.saturating_sub(box_w) / 2;
        let y = viewport.height.saturating_sub(box_h) / 2;
        let rect = Rect::new(x, y, box_w, box_h);

        screen.fill_rect(rect, ' ', Style::default());
        screen.draw_box(rect, Style::fg(Color::Green).bold());
        for (i, line) in lines.iter().enumerate() {
            let style = if i == 0 {
                Style::fg(Color::Green).bold()
            } else {
                Style::default()
            };
            screen.put_centered(x + 1, y + 1 + i as u16, box_w - 2, line, style);
        }
    }

    fn render_footer(&self, screen: &mut Screen, viewport: Viewport, flash: Option<&str>) {
        let y = viewport.height.saturating_sub(1);
        match flash {
            Some(message) => {
                screen.put_str(1, y, message, Style::fg(Color::Red).bold());
            }
            None => {
                screen.put_str(
                    1,
                    y,
                    "drag a card onto its match   r restart   esc menu",
                    Style::default().dim(),
                );
            }
        }
    }
}

fn truncated(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let cut: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{cut}…")
}

fn clip_to_body(frame: Rect, scroll: u16, body: Rect) -> Option<Rect> {
    let top = frame.y as i32 - scroll as i32;
    let bottom = top + frame.height as i32;
    let visible_top = top.max(0);
    let visible_bottom = bottom.min(body.height as i32);
    if visible_bottom <= visible_top {
        return None;
    }
    Some(Rect::new(
        frame.x,
        body.y + visible_top as u16,
        frame.width,
        (visible_bottom - visible_top) as u16,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AgeTier, Point};

    fn viewport() -> Viewport {
        Viewport::new(80, 24)
    }

    #[test]
    fn test_wrap_basic() {
        assert_eq!(wrap("the quick brown fox", 10), vec!["the quick", "brown fox"]);
        assert_eq!(wrap("", 10), vec![""]);
        assert_eq!(wrap("word", 10), vec!["word"]);
    }

    #[test]
    fn test_wrap_splits_long_words() {
        assert_eq!(wrap("abcdefgh", 3), vec!["abc", "def", "gh"]);
    }

    #[test]
    fn test_wrap_never_exceeds_width() {
        let text = "For God so loved the world that he gave his one and only Son";
        for width in 5..30 {
            for line in wrap(text, width) {
                assert!(line.chars().count() <= width, "{line:?} at width {width}");
            }
        }
    }

    #[test]
    fn test_layout_places_every_card_on_large_screen() {
        let view = GameView::new();
        let round = RoundState::new(AgeTier::Beginner, 3);
        let tall = Viewport::new(80, 60);
        let layout = view.layout(&round, tall, 0);

        for verse in round.verses() {
            assert!(layout.bounds_of(verse.id).is_some());
        }
        for reference in round.references() {
            assert!(layout.bounds_of(reference.id).is_some());
        }
    }

    #[test]
    fn test_columns_do_not_overlap() {
        let view = GameView::new();
        let round = RoundState::new(AgeTier::Advanced, 9);
        let layout = view.layout(&round, Viewport::new(80, 200), 0);

        let verse_right = round
            .verses()
            .iter()
            .filter_map(|v| layout.bounds_of(v.id))
            .map(|r| r.x + r.width)
            .max()
            .unwrap();
        let ref_left = round
            .references()
            .iter()
            .filter_map(|r| layout.bounds_of(r.id))
            .map(|r| r.x)
            .min()
            .unwrap();
        assert!(verse_right <= ref_left);
    }

    #[test]
    fn test_scroll_shifts_layout_upward() {
        let view = GameView::new();
        let round = RoundState::new(AgeTier::Advanced, 9);
        let id = round.references()[2].id;

        let at_zero = view.layout(&round, viewport(), 0).bounds_of(id).unwrap();
        let at_two = view.layout(&round, viewport(), 2).bounds_of(id).unwrap();
        assert_eq!(at_two.y, at_zero.y - 2);
    }

    #[test]
    fn test_offscreen_cards_absent_from_layout() {
        let view = GameView::new();
        let round = RoundState::new(AgeTier::Advanced, 9);
        // A very short viewport cannot show the last verse card at scroll 0.
        let short = Viewport::new(80, 10);
        let layout = view.layout(&round, short, 0);
        let last = round.verses().last().unwrap().id;
        assert!(layout.bounds_of(last).is_none());
        assert!(view.max_scroll(&round, short) > 0);
    }

    #[test]
    fn test_render_box_matches_layout_geometry() {
        let view = GameView::new();
        let round = RoundState::new(AgeTier::Beginner, 3);
        let tall = Viewport::new(80, 60);
        let layout = view.layout(&round, tall, 0);
        let screen = view.render(&round, tall, 0, None, None);

        let rect = layout.bounds_of(round.verses()[0].id).unwrap();
        assert_eq!(screen.get(rect.x, rect.y).unwrap().ch, '┌');
        assert_eq!(
            screen
                .get(rect.x + rect.width - 1, rect.bottom() - 1)
                .unwrap()
                .ch,
            '┘'
        );
    }

    #[test]
    fn test_render_header_shows_score_and_progress() {
        let view = GameView::new();
        let round = RoundState::new(AgeTier::Beginner, 3);
        let screen = view.render(&round, viewport(), 0, None, None);

        assert!(screen.row_text(0).contains("Score: 0"));
        assert!(screen.row_text(1).contains("Matched 0/3"));
    }

    #[test]
    fn test_render_flash_message_in_footer() {
        let view = GameView::new();
        let round = RoundState::new(AgeTier::Beginner, 3);
        let screen = view.render(&round, viewport(), 0, None, Some("Try again!"));
        assert!(screen.row_text(23).contains("Try again!"));
    }

    #[test]
    fn test_completion_overlay_renders() {
        let view = GameView::new();
        let mut round = RoundState::new(AgeTier::Beginner, 3);
        let tall = Viewport::new(80, 60);
        let layout = view.layout(&round, tall, 0);
        for i in 0..round.verses().len() {
            let verse = round.verses()[i].clone();
            let target = round
                .references()
                .iter()
                .find(|r| r.reference == verse.reference)
                .unwrap()
                .id;
            let rect = layout.bounds_of(target).unwrap();
            let at = Point::new(rect.x + 1, rect.y + 1);
            round.propose_match(verse.id, at, &layout);
        }
        assert!(round.completed());

        let screen = view.render(&round, tall, 0, None, None);
        let all: String = (0..screen.height())
            .map(|y| screen.row_text(y))
            .collect::<Vec<_>>()
            .join("\n");
        assert!(all.contains("Round Complete!"));
        assert!(all.contains("Press r to play again"));
    }
}
