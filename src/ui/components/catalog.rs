use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::catalog::{CatalogSource, CatalogState, Product, ALL_CATEGORIES};
use crate::ui::layout::contains;
use crate::ui::styles::Styles;
use crate::ui::theme::ThemeListener;

const SELECTOR_WIDTH: u16 = 26;
const CARD_WIDTH: u16 = 34;
const CARD_HEIGHT: u16 = 10;
const DESCRIPTION_CHARS: usize = 100;

/// Category selector plus product grid over a `CatalogSource`
pub struct CatalogView {
    theme: ThemeListener,
    selected_category: String,
    /// Highlighted selector option (0 is "all")
    cursor: usize,
    /// First visible grid row
    scroll: usize,
    /// Selector option hit areas from the last render
    option_areas: Vec<(Rect, String)>,
}

impl CatalogView {
    pub fn new(theme: ThemeListener) -> Self {
        Self {
            theme,
            selected_category: ALL_CATEGORIES.to_string(),
            cursor: 0,
            scroll: 0,
            option_areas: Vec::new(),
        }
    }

    pub fn selected_category(&self) -> &str {
        &self.selected_category
    }

    #[cfg(test)]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Back to the unfiltered view, used when the data source is replaced
    pub fn reset(&mut self) {
        self.selected_category = ALL_CATEGORIES.to_string();
        self.cursor = 0;
        self.scroll = 0;
        self.option_areas.clear();
    }

    pub fn move_up(&mut self, state: &CatalogState) {
        if !is_interactive(state) {
            return;
        }
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_down(&mut self, state: &CatalogState) {
        if !is_interactive(state) {
            return;
        }
        // +1 for the synthetic "all" option
        let last = state.categories().len();
        self.cursor = (self.cursor + 1).min(last);
    }

    /// Apply the option under the cursor
    ///
    /// No-op while the selector is not shown (loading or error).
    pub fn select_highlighted(&mut self, source: &mut CatalogSource) {
        if !is_interactive(source.state()) {
            return;
        }
        let options = selector_options(source.state().categories());
        if let Some(category) = options.get(self.cursor).cloned() {
            self.select(&category, source);
        }
    }

    pub fn select(&mut self, category: &str, source: &mut CatalogSource) {
        self.selected_category = category.to_string();
        self.scroll = 0;
        source.filter_by_category(category);
    }

    /// Select the option rendered at (x, y). Returns true on a hit.
    pub fn select_at(&mut self, x: u16, y: u16, source: &mut CatalogSource) -> bool {
        let hit = self
            .option_areas
            .iter()
            .position(|(area, _)| contains(*area, x, y));

        match hit {
            Some(index) => {
                let category = self.option_areas[index].1.clone();
                self.cursor = index;
                self.select(&category, source);
                true
            }
            None => false,
        }
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    /// Clamped against the grid height on the next render
    pub fn scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_add(1);
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, state: &CatalogState, focused: bool) {
        let styles = self.theme.styles();

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(styles.border(focused))
            .title(Span::styled(" Catalog ", styles.title))
            .style(styles.base);

        let inner = block.inner(area);
        frame.render_widget(block, area);

        if state.is_loading() {
            self.option_areas.clear();
            let loading = Paragraph::new(Span::styled("Loading...", styles.muted_text))
                .alignment(Alignment::Center);
            frame.render_widget(loading, inner);
            return;
        }

        if let Some(error) = state.error() {
            self.option_areas.clear();
            let error = Paragraph::new(Span::styled(format!("Error: {}", error), styles.error_text))
                .wrap(Wrap { trim: true });
            frame.render_widget(error, inner);
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(SELECTOR_WIDTH), Constraint::Min(0)])
            .split(inner);

        self.render_selector(frame, chunks[0], state.categories(), &styles, focused);
        self.render_grid(frame, chunks[1], state.filtered_products(), &styles);
    }

    fn render_selector(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        categories: &[String],
        styles: &Styles,
        focused: bool,
    ) {
        let block = Block::default()
            .borders(Borders::RIGHT)
            .border_style(styles.border_unfocused)
            .title(Span::styled("Filter by Category:", styles.normal_text));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let options = selector_options(categories);
        self.cursor = self.cursor.min(options.len().saturating_sub(1));
        self.option_areas.clear();

        for (index, value) in options.into_iter().enumerate() {
            let y = inner.y + index as u16;
            if y >= inner.y + inner.height {
                break;
            }
            let row = Rect::new(inner.x, y, inner.width, 1);

            let marker = if value == self.selected_category {
                "● "
            } else {
                "○ "
            };
            let style = if focused && index == self.cursor {
                styles.selected
            } else if value == self.selected_category {
                styles.title
            } else {
                styles.normal_text
            };

            frame.render_widget(
                Paragraph::new(Line::from(vec![
                    Span::styled(marker, style),
                    Span::styled(option_label(&value), style),
                ])),
                row,
            );
            self.option_areas.push((row, value));
        }
    }

    fn render_grid(&mut self, frame: &mut Frame, area: Rect, products: &[Product], styles: &Styles) {
        if products.is_empty() {
            frame.render_widget(
                Paragraph::new(Span::styled("No products", styles.muted_text))
                    .alignment(Alignment::Center),
                area,
            );
            return;
        }

        let columns = (area.width / CARD_WIDTH).max(1) as usize;
        let visible_rows = (area.height / CARD_HEIGHT).max(1) as usize;
        let total_rows = products.len().div_ceil(columns);
        self.scroll = self.scroll.min(total_rows.saturating_sub(visible_rows));

        let card_width = (area.width / columns as u16).max(1);

        for (row, chunk) in products
            .chunks(columns)
            .skip(self.scroll)
            .take(visible_rows)
            .enumerate()
        {
            let y = area.y + row as u16 * CARD_HEIGHT;
            let height = CARD_HEIGHT.min(area.y + area.height - y);
            for (column, product) in chunk.iter().enumerate() {
                let card = Rect::new(area.x + column as u16 * card_width, y, card_width, height);
                render_card(frame, card, product, styles);
            }
        }
    }
}

fn render_card(frame: &mut Frame, area: Rect, product: &Product, styles: &Styles) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Plain)
        .border_style(styles.border_unfocused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::from(Span::styled(product.title.as_str(), styles.title)),
        Line::from(Span::styled(product.image.as_str(), styles.muted_text)),
        Line::from(Span::styled(format_price(product.price), styles.price)),
        Line::from(Span::styled(
            truncate_description(&product.description),
            styles.normal_text,
        )),
    ];

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

/// The selector only exists once products settled without error
fn is_interactive(state: &CatalogState) -> bool {
    !state.is_loading() && state.error().is_none()
}

/// "all" followed by every fetched category, in fetch order
pub fn selector_options(categories: &[String]) -> Vec<String> {
    std::iter::once(ALL_CATEGORIES.to_string())
        .chain(categories.iter().cloned())
        .collect()
}

/// Display label for a selector value: first letter upper-cased
pub fn option_label(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// First 100 characters followed by "...", even when nothing was cut
pub fn truncate_description(description: &str) -> String {
    let mut truncated: String = description.chars().take(DESCRIPTION_CHARS).collect();
    truncated.push_str("...");
    truncated
}

pub fn format_price(price: f64) -> String {
    price.to_string()
}
