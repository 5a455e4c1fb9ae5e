use crate::app_event::AppEvent;
use crate::app_event_sender::AppEventSender;
use crate::list_window::ListWindow;
use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyModifiers;
use crossterm::event::MouseButton;
use crossterm::event::MouseEvent;
use crossterm::event::MouseEventKind;
use ratatui::buffer::Buffer;
use ratatui::layout::Position;
use ratatui::layout::Rect;
use ratatui::style::Stylize;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui::widgets::Block;
use ratatui::widgets::Borders;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Widget;
use std::time::Instant;
use stocklens_search::DeferredQuery;
use stocklens_search::NavCursor;
use stocklens_search::OriginCategory;
use stocklens_search::QueryOutcome;
use stocklens_search::SearchHistory;
use stocklens_search::SearchRecord;
use stocklens_search::SourceSet;
use stocklens_search::Suggestion;
use stocklens_search::UnifiedIndex;
use stocklens_search::run_query;
use stocklens_search::suggest;
use tracing::info;
use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

/// Queries shorter than this are not recorded into history on confirm.
const HISTORY_MIN_CHARS: usize = 2;

/// One rendered line of the result list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum DisplayRow {
    GroupHeader(OriginCategory),
    /// Record at this flat position.
    Record(usize),
}

/// Areas remembered from the last render so mouse events can be mapped
/// back onto rows.
#[derive(Clone, Copy, Debug, Default)]
struct ShellLayout {
    shell: Rect,
    input: Rect,
    list: Rect,
}

/// The search box: collapsed affordance or expanded overlay with query
/// input, ghost-text suggestion, grouped results and recent searches.
/// Owns the full search state machine; the app event loop feeds it keys,
/// mouse events and debounce ticks.
pub(crate) struct SearchShell {
    index: UnifiedIndex,
    query: DeferredQuery,
    outcome: QueryOutcome,
    suggestion: Option<Suggestion>,
    cursor: NavCursor,
    history: SearchHistory,
    history_cursor: usize,
    expanded: bool,
    input_focused: bool,
    rows: Vec<DisplayRow>,
    /// Flat result position -> index into `rows`.
    flat_rows: Vec<usize>,
    window: ListWindow,
    layout: ShellLayout,
    app_event_tx: AppEventSender,
}

impl SearchShell {
    pub(crate) fn new(
        sources: &SourceSet,
        history: SearchHistory,
        app_event_tx: AppEventSender,
    ) -> Self {
        let mut index = UnifiedIndex::new();
        index.refresh(sources);
        Self {
            index,
            query: DeferredQuery::default(),
            outcome: QueryOutcome::empty(),
            suggestion: None,
            cursor: NavCursor::new(),
            history,
            history_cursor: 0,
            expanded: false,
            input_focused: false,
            rows: Vec::new(),
            flat_rows: Vec::new(),
            window: ListWindow::new(),
            layout: ShellLayout::default(),
            app_event_tx,
        }
    }

    pub(crate) fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Next debounce deadline, for the event loop timer.
    pub(crate) fn deadline(&self) -> Option<Instant> {
        self.query.deadline()
    }

    /// Pick up external source mutations. The selection survives a data
    /// refresh; only a settled-query change resets it.
    pub(crate) fn refresh_sources(&mut self, sources: &SourceSet) {
        if self.index.refresh(sources) && !self.query.settled().trim().is_empty() {
            self.evaluate();
        }
    }

    /// Debounce tick: settle the lagging query copy if its deadline has
    /// passed and re-evaluate.
    pub(crate) fn on_tick(&mut self, now: Instant) {
        if self.query.poll(now) {
            self.cursor.reset();
            self.evaluate();
        }
    }

    /// Returns true when the key was consumed by the shell.
    pub(crate) fn handle_key(&mut self, key: KeyEvent, now: Instant) -> bool {
        // Global summon chord. Ignored while the input already has focus,
        // the way the browser original ignores it inside editable fields.
        if key.code == KeyCode::Char('k') && key.modifiers.contains(KeyModifiers::CONTROL) {
            if !self.input_focused {
                self.expanded = true;
                self.input_focused = true;
            }
            return true;
        }
        if !self.expanded {
            return false;
        }

        let history_mode = self.query.raw().trim().is_empty();
        match key.code {
            KeyCode::Esc => self.cancel(),
            KeyCode::Enter => {
                if history_mode {
                    self.fill_from_history(now);
                } else {
                    self.confirm();
                }
            }
            KeyCode::Tab => {
                if !key.modifiers.contains(KeyModifiers::SHIFT) {
                    self.accept_suggestion(now);
                }
            }
            KeyCode::BackTab => {}
            KeyCode::Down => {
                if history_mode {
                    self.move_history(1);
                } else {
                    self.cursor.move_down(self.outcome.results.flat_len());
                }
            }
            KeyCode::Up => {
                if history_mode {
                    self.move_history(-1);
                } else {
                    self.cursor.move_up(self.outcome.results.flat_len());
                }
            }
            KeyCode::Delete if history_mode => self.remove_history_entry(),
            KeyCode::Char('l') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                if history_mode {
                    self.history.clear();
                    self.history_cursor = 0;
                }
            }
            KeyCode::Backspace => {
                let mut next = self.query.raw().to_string();
                next.pop();
                self.query.set_raw(next, now);
            }
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                let mut next = self.query.raw().to_string();
                next.push(c);
                self.query.set_raw(next, now);
            }
            _ => return false,
        }
        true
    }

    pub(crate) fn handle_mouse(&mut self, mouse: MouseEvent) {
        let position = Position::new(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Moved if self.expanded => {
                // Hovering only addresses result rows, never history.
                if self.query.raw().trim().is_empty() || !self.layout.list.contains(position) {
                    return;
                }
                let row = self.window.first() + (mouse.row - self.layout.list.y) as usize;
                if let Some(DisplayRow::Record(flat)) = self.rows.get(row) {
                    self.cursor.hover(*flat);
                }
            }
            MouseEventKind::Down(MouseButton::Left) => {
                if self.layout.shell.contains(position) {
                    if self.layout.input.contains(position) {
                        self.expanded = true;
                        self.input_focused = true;
                    }
                } else if self.expanded {
                    // Blur: collapse only while the query is empty.
                    if self.query.raw().trim().is_empty() {
                        self.expanded = false;
                    }
                    self.input_focused = false;
                }
            }
            _ => {}
        }
    }

    fn evaluate(&mut self) {
        let settled = self.query.settled().to_string();
        self.outcome = run_query(self.index.records(), &settled);
        self.suggestion = suggest(self.index.records(), &settled);
        self.rebuild_rows();
        self.window.reset();
    }

    fn rebuild_rows(&mut self) {
        self.rows.clear();
        self.flat_rows.clear();
        for group in self.outcome.results.groups() {
            self.rows.push(DisplayRow::GroupHeader(group.origin));
            for offset in 0..group.records.len() {
                self.flat_rows.push(self.rows.len());
                self.rows.push(DisplayRow::Record(group.offset + offset));
            }
        }
    }

    /// Escape: local state reset, nothing asynchronous to abort.
    fn cancel(&mut self) {
        self.query.clear();
        self.suggestion = None;
        self.cursor.reset();
        self.outcome = QueryOutcome::empty();
        self.rows.clear();
        self.flat_rows.clear();
        self.window.reset();
        self.expanded = false;
        self.input_focused = false;
    }

    fn confirm(&mut self) {
        let len = self.outcome.results.flat_len();
        let Some(position) = self.cursor.effective(len) else {
            return;
        };
        let Some(record) = self.outcome.results.get(position) else {
            return;
        };
        let raw = self.query.raw().to_string();
        if raw.trim().chars().count() >= HISTORY_MIN_CHARS {
            self.history.add(&raw, self.outcome.total_matches);
            self.history_cursor = 0;
        }
        let route = record.origin.route_for(record);
        info!(%route, "search result confirmed");
        self.app_event_tx.send(AppEvent::Navigate(route));
        self.cancel();
    }

    fn accept_suggestion(&mut self, now: Instant) {
        let Some(full) = self.active_suggestion().map(|s| s.full().to_string()) else {
            return;
        };
        self.query.set_raw(full, now);
        self.query.flush();
        self.cursor.reset();
        self.evaluate();
    }

    fn fill_from_history(&mut self, now: Instant) {
        let Some(entry) = self.history.entries().get(self.history_cursor) else {
            return;
        };
        // Re-populates the input without re-adding the entry; only an
        // explicit confirm refreshes its place in history.
        let query = entry.query.clone();
        self.query.set_raw(query, now);
        self.query.flush();
        self.cursor.reset();
        self.evaluate();
        self.input_focused = true;
    }

    fn remove_history_entry(&mut self) {
        let Some(entry) = self.history.entries().get(self.history_cursor) else {
            return;
        };
        let query = entry.query.clone();
        self.history.remove(&query);
        if self.history_cursor >= self.history.len() && self.history_cursor > 0 {
            self.history_cursor -= 1;
        }
    }

    fn move_history(&mut self, delta: isize) {
        let len = self.history.len();
        if len == 0 {
            return;
        }
        let current = self.history_cursor as isize;
        self.history_cursor = (current + delta).rem_euclid(len as isize) as usize;
    }

    /// The tracked suggestion, but only while it still completes what is
    /// currently typed; a raw edit that breaks the prefix hides the ghost
    /// until the next settle recomputes it.
    fn active_suggestion(&self) -> Option<&Suggestion> {
        let typed = self.query.raw().trim();
        if typed.chars().count() < HISTORY_MIN_CHARS {
            return None;
        }
        let suggestion = self.suggestion.as_ref()?;
        suggestion
            .full()
            .to_lowercase()
            .starts_with(&typed.to_lowercase())
            .then_some(suggestion)
    }

    pub(crate) fn render(&mut self, area: Rect, buf: &mut Buffer) {
        if !self.expanded {
            self.layout = ShellLayout {
                shell: Rect::new(area.x, area.y, area.width, 1.min(area.height)),
                input: Rect::new(area.x, area.y, area.width, 1.min(area.height)),
                list: Rect::default(),
            };
            Paragraph::new(Line::from(vec![
                "  Search".into(),
                "  Ctrl+K".dim(),
            ]))
            .render(self.layout.shell, buf);
            return;
        }

        let block = Block::default().borders(Borders::ALL).title(" Search ");
        let inner = block.inner(area);
        block.render(area, buf);
        self.layout.shell = area;

        if inner.height == 0 {
            return;
        }
        self.layout.input = Rect::new(inner.x, inner.y, inner.width, 1);
        self.render_input(self.layout.input, buf);

        let body = Rect::new(
            inner.x,
            inner.y + 1,
            inner.width,
            inner.height.saturating_sub(2),
        );
        if self.query.raw().trim().is_empty() {
            self.layout.list = body;
            self.render_history(body, buf);
        } else {
            self.render_results(body, buf);
        }

        if inner.height >= 2 {
            let footer = Rect::new(inner.x, inner.bottom() - 1, inner.width, 1);
            self.render_footer(footer, buf);
        }
    }

    fn render_input(&self, area: Rect, buf: &mut Buffer) {
        let raw = self.query.raw();
        let mut spans: Vec<Span> = vec!["› ".dim(), raw.to_string().into()];
        match self.active_suggestion().map(|s| s.remainder(raw)) {
            Some(ghost) if !ghost.is_empty() => spans.push(ghost.to_string().dim()),
            _ => {
                if self.input_focused {
                    spans.push("▌".dim());
                }
            }
        }
        if self.query.is_searching() {
            spans.push("  searching…".dim().italic());
        }
        Paragraph::new(Line::from(spans)).render(area, buf);
    }

    fn render_results(&mut self, area: Rect, buf: &mut Buffer) {
        self.layout.list = area;
        if area.height == 0 {
            return;
        }
        if self.rows.is_empty() {
            if !self.query.is_searching() {
                Paragraph::new(Line::from("No results".dim())).render(area, buf);
            }
            return;
        }
        let selected_row = self
            .cursor
            .selected()
            .and_then(|flat| self.flat_rows.get(flat).copied());
        if let Some(row) = selected_row {
            self.window
                .ensure_visible(row, self.rows.len(), area.height as usize);
        }
        let width = area.width as usize;
        for (line_idx, row) in self
            .rows
            .iter()
            .skip(self.window.first())
            .take(area.height as usize)
            .enumerate()
        {
            let y = area.y + line_idx as u16;
            let line = match row {
                DisplayRow::GroupHeader(origin) => Line::from(origin.label().bold().dim()),
                DisplayRow::Record(flat) => {
                    let Some(record) = self.outcome.results.get(*flat) else {
                        continue;
                    };
                    let text = truncate_text(&record_line(record), width.saturating_sub(3));
                    if Some(*flat) == self.cursor.selected() {
                        Line::from(format!(" ▸ {text}")).reversed()
                    } else {
                        Line::from(format!("   {text}"))
                    }
                }
            };
            Paragraph::new(line).render(Rect::new(area.x, y, area.width, 1), buf);
        }
    }

    fn render_history(&self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        let mut lines: Vec<Line> = vec![Line::from("Recent searches".bold().dim())];
        if self.history.is_empty() {
            lines.push(Line::from("   Nothing yet. Start typing to search.".dim()));
        }
        for (idx, entry) in self.history.entries().iter().enumerate() {
            let text = format!(
                "{}  ·  {} results",
                entry.query, entry.results_count
            );
            let line = if idx == self.history_cursor {
                Line::from(format!(" ▸ {text}")).reversed()
            } else {
                Line::from(format!("   {text}"))
            };
            lines.push(line);
        }
        Paragraph::new(lines).render(area, buf);
    }

    fn render_footer(&self, area: Rect, buf: &mut Buffer) {
        let hint = if self.query.raw().trim().is_empty() {
            "↑↓ select · Enter fill · Del remove · Ctrl+L clear · Esc close".to_string()
        } else if self.outcome.truncated {
            format!(
                "showing {} of {} matches · ↑↓ select · Enter open · Esc close",
                self.outcome.results.flat_len(),
                self.outcome.total_matches
            )
        } else {
            "↑↓ select · Enter open · Tab complete · Esc close".to_string()
        };
        Paragraph::new(Line::from(hint.dim())).render(area, buf);
    }
}

fn record_line(record: &SearchRecord) -> String {
    let code = record
        .inventory_code
        .as_deref()
        .or(record.receipt_folio.as_deref())
        .or(record.retirement_folio.as_deref())
        .unwrap_or(&record.id);
    let detail = record
        .description
        .as_deref()
        .or(record.custodian.as_deref())
        .or(record.area.as_deref())
        .unwrap_or("");
    if detail.is_empty() {
        code.to_string()
    } else {
        format!("{code}  ·  {detail}")
    }
}

fn truncate_text(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max_width.saturating_sub(1) {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}
