//! Screen renderers
//!
//! Turn a `ViewState` into a `Frame` for a given viewport. Nothing here
//! touches the terminal; image decoding goes through the shared `ImageCache`.

use crate::config::{Config, DisplayConfig};
use crate::core::data::{FacetKind, Recipe, RecipeCatalog};
use crate::ui::frame::{Frame, Line, Span};
use crate::ui::state::{Focus, Layout, Screen, ViewState};
use crate::utils::format::{center_text, fit_width, recipe_detail_text, truncate_string, wrap_text};
use crate::utils::image::{IMAGE_PLACEHOLDER, ImageCache, ImageSlot};
use crossterm::style::Color;

const APP_TITLE: &str = "Recipe Library";
const HEADER_ROWS: usize = 4;
const FOOTER_ROWS: usize = 1;
const MIN_CARD_ROWS: usize = 3;
const SEARCH_FIELD_WIDTH: usize = 30;
const EMPTY_RESULTS: &str = "No recipes match your search.";
const VIEW_DETAILS: &str = " View Details ";

const BUTTON_RED: Color = Color::Rgb { r: 255, g: 80, b: 80 };
const DETAIL_HEADER: Color = Color::Rgb { r: 34, g: 45, b: 50 };

/// Terminal size in cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: usize,
    pub height: usize,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width: usize::from(width),
            height: usize::from(height),
        }
    }
}

fn card_inner_rows(display: &DisplayConfig) -> usize {
    usize::from(display.thumbnail_height).max(MIN_CARD_ROWS)
}

fn card_height(display: &DisplayConfig) -> usize {
    card_inner_rows(display) + 2
}

fn list_area_rows(viewport: Viewport) -> usize {
    viewport.height.saturating_sub(HEADER_ROWS + FOOTER_ROWS)
}

fn detail_body_rows(viewport: Viewport) -> usize {
    viewport.height.saturating_sub(2).max(1)
}

fn detail_text_width(viewport: Viewport) -> usize {
    viewport.width.saturating_sub(4).max(10)
}

/// Paging and scroll limits for the current screen
pub fn measure(state: &ViewState, catalog: &RecipeCatalog, display: &DisplayConfig, viewport: Viewport) -> Layout {
    let cards_per_page = (list_area_rows(viewport) / card_height(display)).max(1);
    let detail_page = detail_body_rows(viewport);

    let detail_max_scroll = match state.screen() {
        Screen::Detail(index) => catalog
            .get(index)
            .map(|recipe| {
                let text_rows = wrap_text(&recipe_detail_text(recipe), detail_text_width(viewport)).len();
                let body = usize::from(display.detail_image_height) + 1 + text_rows;
                body.saturating_sub(detail_page)
            })
            .unwrap_or(0),
        Screen::Listing => 0,
    };

    Layout {
        cards_per_page,
        detail_max_scroll,
        detail_page,
    }
}

/// Render whichever screen the state is on
pub fn render(
    state: &ViewState,
    catalog: &RecipeCatalog,
    config: &Config,
    viewport: Viewport,
    images: &mut ImageCache,
) -> Frame {
    match state.screen() {
        Screen::Listing => render_listing(state, catalog, config, viewport, images),
        Screen::Detail(index) => match catalog.get(index) {
            Some(recipe) => render_detail(recipe, state.detail_scroll(), config, viewport, images),
            None => render_listing(state, catalog, config, viewport, images),
        },
    }
}

pub fn render_listing(
    state: &ViewState,
    catalog: &RecipeCatalog,
    config: &Config,
    viewport: Viewport,
    images: &mut ImageCache,
) -> Frame {
    let width = viewport.width;
    let mut frame = Frame::new();

    frame.push(title_bar(APP_TITLE, width, Color::Blue));
    frame.push(search_row(state));
    frame.push(filter_row(state));
    frame.push(Line::from_spans(vec![Span::raw("─".repeat(width)).fg(Color::DarkGrey)]));

    let area = list_area_rows(viewport);
    let mut body: Vec<Line> = Vec::new();

    if state.results().is_empty() {
        body.push(Line::from_spans(vec![Span::raw(format!(" {}", EMPTY_RESULTS)).fg(Color::DarkGrey)]));
    } else {
        let page = (area / card_height(&config.display)).max(1);
        let results_focused = state.focus() == Focus::Results;

        for (pos, &index) in state
            .results()
            .iter()
            .enumerate()
            .skip(state.list_scroll())
            .take(page)
        {
            if let Some(recipe) = catalog.get(index) {
                let selected = pos == state.selected();
                body.extend(render_card(recipe, selected, results_focused, config, width, images));
            }
        }
    }

    body.truncate(area);
    body.resize(area, Line::new());
    frame.lines.extend(body);

    frame.push(status_line(state, catalog));
    frame
}

fn title_bar(title: &str, width: usize, background: Color) -> Line {
    Line::from_spans(vec![
        Span::raw(center_text(title, width))
            .fg(Color::White)
            .bg(background)
            .bold(),
    ])
}

fn search_row(state: &ViewState) -> Line {
    let focused = state.focus() == Focus::Search;
    let mut text = state.search_text().to_string();
    if focused {
        text.push('_');
    }

    // Keep the end of long input visible
    let len = text.chars().count();
    if len > SEARCH_FIELD_WIDTH {
        text = text.chars().skip(len - SEARCH_FIELD_WIDTH).collect();
    }

    let mut field = Span::raw(format!("[{}]", fit_width(&text, SEARCH_FIELD_WIDTH)));
    if focused {
        field = field.fg(Color::White).bold();
    }

    Line::from_spans(vec![
        Span::raw(" Search: ").bold(),
        field,
        Span::raw("  "),
        Span::raw("[ Search ]").fg(Color::Black).bg(Color::Grey),
    ])
}

fn filter_row(state: &ViewState) -> Line {
    let mut line = Line::new();

    for kind in [FacetKind::Difficulty, FacetKind::Cuisine, FacetKind::Dietary] {
        let value = state.selector(kind).current();
        line.push(Span::raw(format!(" {}: ", kind.label())).bold());

        if state.focus() == Focus::Facet(kind) {
            line.push(Span::raw(format!("< {} >", value)).fg(Color::Black).bg(Color::Cyan));
        } else {
            line.push(Span::raw(format!("[{}]", value)).fg(Color::Cyan));
        }
        line.push(Span::raw(" "));
    }

    line
}

fn status_line(state: &ViewState, catalog: &RecipeCatalog) -> Line {
    let shown = state.results().len();
    let mut status = format!(" {} of {} recipes", shown, catalog.len());

    if shown > 0 {
        let page = state.layout().cards_per_page.max(1);
        let first = state.list_scroll() + 1;
        let last = (state.list_scroll() + page).min(shown);
        status.push_str(&format!(" (showing {}-{})", first, last));
    }

    let hints = "  Tab: focus  Enter: search/view details  ←/→: filter  ↑/↓: select  Esc: quit";
    Line::from_spans(vec![
        Span::raw(status).bold(),
        Span::raw(hints).fg(Color::DarkGrey),
    ])
}

/// One summary card: thumbnail, name, ingredients preview and the details button
pub fn render_card(
    recipe: &Recipe,
    selected: bool,
    focused: bool,
    config: &Config,
    width: usize,
    images: &mut ImageCache,
) -> Vec<Line> {
    let display = &config.display;
    let inner_rows = card_inner_rows(display);
    let thumb_width = usize::from(display.thumbnail_width);
    let show_thumbnail = width >= thumb_width + 16;

    let text_width = if show_thumbnail {
        width.saturating_sub(thumb_width + 6)
    } else {
        width.saturating_sub(4)
    }
    .max(1);

    let border = if selected && focused {
        BUTTON_RED
    } else if selected {
        Color::White
    } else {
        Color::DarkGrey
    };

    let thumbnail = if show_thumbnail {
        let path = config.resolve_asset(recipe.image_path());
        let slot = images.get_or_load(&path, display.thumbnail_width, display.thumbnail_height);
        image_lines(slot, thumb_width, inner_rows)
    } else {
        Vec::new()
    };

    let mut text_rows = card_text_rows(recipe, selected, focused, text_width, inner_rows);

    let inner = width.saturating_sub(2);
    let mut lines = Vec::with_capacity(inner_rows + 2);
    lines.push(Line::from_spans(vec![
        Span::raw(format!("┌{}┐", "─".repeat(inner))).fg(border),
    ]));

    for (row, text) in text_rows.drain(..).enumerate() {
        let mut line = Line::from_spans(vec![Span::raw("│ ").fg(border)]);
        if let Some(image_row) = thumbnail.get(row) {
            line.extend(image_row.clone());
            line.push(Span::raw("  "));
        }
        line.extend(text);
        line.push(Span::raw(" │").fg(border));
        lines.push(line);
    }

    lines.push(Line::from_spans(vec![
        Span::raw(format!("└{}┘", "─".repeat(inner))).fg(border),
    ]));
    lines
}

/// Text column of a card, each row padded to `width`
fn card_text_rows(recipe: &Recipe, selected: bool, focused: bool, width: usize, rows: usize) -> Vec<Line> {
    let mut out = Vec::with_capacity(rows);

    let mut name = Span::raw(fit_width(recipe.name(), width)).bold();
    if selected {
        name = name.fg(Color::Green);
    }
    out.push(Line::from_spans(vec![name]));

    let available = rows.saturating_sub(2);
    let wrapped = wrap_text(&format!("Ingredients: {}", recipe.ingredients()), width);
    let overflow = wrapped.len() > available;

    for (i, text) in wrapped.iter().take(available).enumerate() {
        let text = if overflow && i + 1 == available {
            truncate_string(&format!("{} {}", text, "..."), width)
        } else {
            text.clone()
        };
        out.push(Line::from_spans(vec![
            Span::raw(fit_width(&text, width)).fg(Color::Grey),
        ]));
    }
    while out.len() < rows - 1 {
        out.push(Line::raw(" ".repeat(width)));
    }

    let button = if selected && focused {
        Span::raw(VIEW_DETAILS).fg(Color::White).bg(BUTTON_RED).bold()
    } else {
        Span::raw(VIEW_DETAILS).fg(BUTTON_RED)
    };
    let pad = width.saturating_sub(VIEW_DETAILS.len());
    let mut button_row = Line::from_spans(vec![button]);
    button_row.push(Span::raw(" ".repeat(pad)));
    out.push(button_row);

    out
}

/// Render an image slot as `height` rows of `width` cells.
///
/// Loaded images use upper-half blocks so each cell carries two pixels;
/// missing images show a centred placeholder.
pub fn image_lines(slot: &ImageSlot, width: usize, height: usize) -> Vec<Line> {
    match slot {
        ImageSlot::Loaded(asset) => {
            let cols = usize::from(asset.width()).min(width);
            let rows = usize::from(asset.height()).min(height);
            let mut lines = Vec::with_capacity(height);

            for row in 0..rows {
                let mut line = Line::new();
                for col in 0..cols {
                    let (upper, lower) = asset.cell(col as u16, row as u16);
                    line.push(
                        Span::raw("▀")
                            .fg(Color::Rgb { r: upper[0], g: upper[1], b: upper[2] })
                            .bg(Color::Rgb { r: lower[0], g: lower[1], b: lower[2] }),
                    );
                }
                if cols < width {
                    line.push(Span::raw(" ".repeat(width - cols)));
                }
                lines.push(line);
            }
            while lines.len() < height {
                lines.push(Line::raw(" ".repeat(width)));
            }
            lines
        }
        ImageSlot::Missing => {
            let middle = height / 2;
            (0..height)
                .map(|row| {
                    if row == middle {
                        let label = truncate_string(IMAGE_PLACEHOLDER, width);
                        Line::from_spans(vec![Span::raw(center_text(&label, width)).fg(Color::DarkGrey)])
                    } else {
                        Line::raw(" ".repeat(width))
                    }
                })
                .collect()
        }
    }
}

/// Full-screen detail: header, large image, then the recipe text
pub fn render_detail(
    recipe: &Recipe,
    scroll: usize,
    config: &Config,
    viewport: Viewport,
    images: &mut ImageCache,
) -> Frame {
    let width = viewport.width;
    let display = &config.display;
    let mut frame = Frame::new();

    frame.push(title_bar(recipe.name(), width, DETAIL_HEADER));

    let mut body = Vec::new();

    let image_width = usize::from(display.detail_image_width);
    let image_height = usize::from(display.detail_image_height);
    let path = config.resolve_asset(recipe.image_path());
    let slot = images.get_or_load(&path, display.detail_image_width, display.detail_image_height);
    let indent = " ".repeat(width.saturating_sub(image_width) / 2);
    for image_row in image_lines(slot, image_width, image_height) {
        let mut line = Line::raw(indent.clone());
        line.extend(image_row);
        body.push(line);
    }
    body.push(Line::new());

    for text in wrap_text(&recipe_detail_text(recipe), detail_text_width(viewport)) {
        let mut span = Span::raw(format!("  {}", text));
        if is_detail_heading(&text) {
            span = span.fg(Color::Cyan).bold();
        }
        body.push(Line::from_spans(vec![span]));
    }

    let visible = detail_body_rows(viewport);
    let start = scroll.min(body.len().saturating_sub(visible));
    let mut shown: Vec<Line> = body.into_iter().skip(start).take(visible).collect();
    shown.resize(visible, Line::new());
    frame.lines.extend(shown);

    frame.push(Line::from_spans(vec![
        Span::raw(" Esc/q: back  ↑/↓ PgUp/PgDn: scroll").fg(Color::DarkGrey),
    ]));
    frame
}

fn is_detail_heading(text: &str) -> bool {
    matches!(text, "Ingredients:" | "Instructions:")
        || [
            "Cooking Time:",
            "Preparation Time:",
            "Difficulty:",
            "Cuisine:",
            "Dietary Preferences:",
        ]
        .iter()
        .any(|label| text.starts_with(label))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FacetConfig;
    use crate::core::seed::BuiltinRecipes;
    use crate::core::traits::RecipeSearch;
    use crate::ui::state::Action;
    use image::RgbImage;
    use tempfile::TempDir;

    fn setup(viewport: Viewport) -> (RecipeCatalog, ViewState, Config) {
        let catalog = RecipeCatalog::from_source(&BuiltinRecipes);
        let config = Config::default();
        let mut state = ViewState::new(&catalog, &FacetConfig::default());
        state.set_layout(measure(&state, &catalog, &config.display, viewport));
        (catalog, state, config)
    }

    const VIEWPORT: Viewport = Viewport { width: 100, height: 40 };

    #[test]
    fn test_measure_cards_per_page() {
        let (catalog, state, config) = setup(VIEWPORT);
        // 40 rows minus 5 chrome rows, cards are 8 + 2 rows high
        assert_eq!(measure(&state, &catalog, &config.display, VIEWPORT).cards_per_page, 3);

        let tiny = Viewport { width: 40, height: 6 };
        assert_eq!(measure(&state, &catalog, &config.display, tiny).cards_per_page, 1);
    }

    #[test]
    fn test_listing_frame_fills_viewport() {
        let (catalog, state, config) = setup(VIEWPORT);
        let mut images = ImageCache::new();
        let frame = render(&state, &catalog, &config, VIEWPORT, &mut images);

        assert_eq!(frame.len(), VIEWPORT.height);
        assert!(frame.lines[0].text().contains("Recipe Library"));
        assert!(frame.lines[1].text().contains("Search:"));
        let filters = frame.lines[2].text();
        assert!(filters.contains("Difficulty: [All]"));
        assert!(filters.contains("Cuisine: [All]"));
        assert!(filters.contains("Dietary: [All]"));
        assert!(frame.lines.last().map(Line::text).unwrap_or_default().contains("14 of 14 recipes (showing 1-3)"));
    }

    #[test]
    fn test_listing_shows_first_page_of_cards() {
        let (catalog, state, config) = setup(VIEWPORT);
        let mut images = ImageCache::new();
        let frame = render_listing(&state, &catalog, &config, VIEWPORT, &mut images);

        assert!(frame.contains("Spaghetti Bolognese"));
        assert!(frame.contains("Vegetable Stir Fry"));
        assert!(frame.contains("Chicken Caesar Salad"));
        assert!(!frame.contains("Chicken Tikka Masala"));
        assert!(frame.contains("Ingredients: Spaghetti, Ground Beef"));
        assert!(frame.contains("View Details"));
        // no assets are installed, so every thumbnail falls back
        assert!(frame.contains(IMAGE_PLACEHOLDER));
    }

    #[test]
    fn test_card_lines_have_fixed_width() {
        let (catalog, _, config) = setup(VIEWPORT);
        let mut images = ImageCache::new();
        let recipe = catalog.find_by_name("Falafel").unwrap();
        let lines = render_card(recipe, true, true, &config, 80, &mut images);

        assert_eq!(lines.len(), 10);
        assert!(lines.iter().all(|l| l.width() == 80));
        assert!(lines[1].text().contains("Falafel"));
    }

    #[test]
    fn test_card_without_room_for_thumbnail() {
        let (catalog, _, config) = setup(VIEWPORT);
        let mut images = ImageCache::new();
        let recipe = catalog.find_by_name("Pad Thai").unwrap();
        let lines = render_card(recipe, false, false, &config, 24, &mut images);

        assert!(lines.iter().all(|l| l.width() == 24));
        assert!(!lines.iter().any(|l| l.text().contains(IMAGE_PLACEHOLDER)));
        assert!(images.is_empty());
    }

    #[test]
    fn test_empty_results_message() {
        let (catalog, mut state, config) = setup(VIEWPORT);
        for c in "durian".chars() {
            state.apply(Action::Input(c), &catalog);
        }
        state.apply(Action::Search, &catalog);

        let mut images = ImageCache::new();
        let frame = render(&state, &catalog, &config, VIEWPORT, &mut images);
        assert!(frame.contains(EMPTY_RESULTS));
        assert!(frame.contains("0 of 14 recipes"));
        assert!(!frame.contains("View Details"));
    }

    #[test]
    fn test_focused_facet_is_highlighted() {
        let (catalog, mut state, config) = setup(VIEWPORT);
        state.apply(Action::FocusNext, &catalog);
        state.apply(Action::NextOption, &catalog);

        let mut images = ImageCache::new();
        let frame = render(&state, &catalog, &config, VIEWPORT, &mut images);
        assert!(frame.lines[2].text().contains("Difficulty: < Easy >"));
    }

    #[test]
    fn test_detail_frame_contents() {
        let (catalog, mut state, config) = setup(VIEWPORT);
        state.apply(Action::OpenDetail, &catalog);

        let mut images = ImageCache::new();
        let frame = render(&state, &catalog, &config, VIEWPORT, &mut images);
        assert_eq!(frame.len(), VIEWPORT.height);
        assert!(frame.lines[0].text().contains("Spaghetti Bolognese"));
        assert!(frame.contains(IMAGE_PLACEHOLDER));
        assert!(frame.contains("Ingredients:"));
        assert!(frame.contains("Instructions:"));
    }

    #[test]
    fn test_detail_scrolls_to_remaining_text() {
        let viewport = Viewport { width: 60, height: 30 };
        let (catalog, mut state, config) = setup(viewport);
        state.apply(Action::OpenDetail, &catalog);
        state.set_layout(measure(&state, &catalog, &config.display, viewport));
        let max = state.layout().detail_max_scroll;
        assert!(max > 0);

        let mut images = ImageCache::new();
        let top = render(&state, &catalog, &config, viewport, &mut images);
        assert!(!top.contains("Dietary Preferences: Gluten-Free"));

        for _ in 0..max + 5 {
            state.apply(Action::ScrollDown, &catalog);
        }
        assert_eq!(state.detail_scroll(), max);
        let bottom = render(&state, &catalog, &config, viewport, &mut images);
        assert!(bottom.contains("Dietary Preferences: Gluten-Free"));
        assert!(bottom.contains("Cooking Time: 30 minutes"));
    }

    #[test]
    fn test_loaded_image_renders_blocks() {
        let dir = TempDir::new().unwrap();
        let image_dir = dir.path().join("j").join("images");
        std::fs::create_dir_all(&image_dir).unwrap();
        RgbImage::from_pixel(32, 32, image::Rgb([200, 120, 40]))
            .save(image_dir.join("falafal.png"))
            .unwrap();
        // the decoder sniffs content, so a PNG under a .jpg name still loads
        std::fs::rename(image_dir.join("falafal.png"), image_dir.join("falafal.jpg")).unwrap();

        let catalog = RecipeCatalog::from_source(&BuiltinRecipes);
        let mut config = Config::default();
        config.general.assets_dir = dir.path().to_path_buf();

        let recipe = catalog.find_by_name("Falafel").unwrap();
        let mut images = ImageCache::new();
        let frame = render_detail(recipe, 0, &config, VIEWPORT, &mut images);
        assert!(frame.contains("▀"));
        assert!(!frame.contains(IMAGE_PLACEHOLDER));

        let card = render_card(recipe, false, false, &config, 80, &mut images);
        assert!(card.iter().any(|l| l.text().contains("▀")));
    }

    #[test]
    fn test_missing_image_placeholder_is_centred() {
        let lines = image_lines(&ImageSlot::Missing, 21, 5);
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[2].text(), "   Image not found   ");
        assert!(lines.iter().all(|l| l.width() == 21));
    }
}
