use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Tabs, Wrap};
use ratatui::Frame;

use crate::favorites::FavoritesStore;
use crate::ui::app::App;
use crate::ui::layout::{layout_regions, split_detail};
use crate::ui::page::{
    AlbumPageState, FavoritesPageState, FavoritesSection, HomePageState, Page, PostPageState,
    UserPageState, UserTab,
};
use crate::ui::resource::{PagePhase, Resource};
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, FAVORITE, GLOBAL_BORDER, HEADER_TEXT, STATUS_ERROR, STATUS_OK,
    STATUS_WARN, TEXT_DIM,
};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let (header, body, footer) = layout_regions(frame.area());

    draw_header(frame, app, header);

    let spinner = SPINNER[app.spinner_frame() % SPINNER.len()];
    match app.page() {
        Page::Home(state) => draw_home(frame, state, spinner, body),
        Page::User(state) => draw_user(frame, state, app.favorites(), spinner, body),
        Page::Post(state) => draw_post(frame, state, app.favorites(), spinner, body),
        Page::Album(state) => draw_album(frame, state, app.favorites(), spinner, body),
        Page::Favorites(state) => draw_favorites(frame, state, app.favorites(), body),
    }

    draw_footer(frame, app, footer);
}

fn draw_header(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let badge = match app.favorites().total() {
        0 => String::new(),
        n => format!("  ♥ {n}"),
    };
    let line = Line::from(vec![
        Span::styled(
            " placeview",
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("  {}", app.route().path()), Style::default().fg(TEXT_DIM)),
        Span::styled(badge, Style::default().fg(FAVORITE)),
    ]);

    let widget = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    );
    frame.render_widget(widget, area);
}

fn draw_footer(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let hints = match app.page() {
        Page::Home(_) => " ↑↓: Select │ Enter: Open user │ f: Favorites │ q: Quit",
        Page::User(_) => " Tab: Switch tab │ ↑↓: Select │ Enter: Open │ Space: Favorite │ Esc: Back",
        Page::Post(_) => " ↑↓: Scroll │ Space: Favorite │ Esc: Back │ f: Favorites",
        Page::Album(_) => " ↑↓: Select photo │ Space: Favorite │ Esc: Back",
        Page::Favorites(_) => " Tab: Section │ ↑↓: Select │ Enter: Open │ d: Remove │ Esc: Back",
    };
    let version = format!("v{VERSION} ");

    let hints_width = hints.chars().count();
    let content_width = area.width.saturating_sub(2) as usize;
    let padding = content_width.saturating_sub(hints_width).saturating_sub(version.len());

    let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
    let line = Line::from(vec![
        Span::styled(hints, text_style),
        Span::styled(" ".repeat(padding.max(1)), text_style),
        Span::styled(version, text_style),
    ]);

    let widget = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    );
    frame.render_widget(widget, area);
}

fn draw_loading(frame: &mut Frame<'_>, spinner: &str, label: &str, area: Rect) {
    let widget = Paragraph::new(format!("{spinner} {label}"))
        .style(Style::default().fg(TEXT_DIM))
        .alignment(Alignment::Center);
    frame.render_widget(widget, centered_line(area));
}

fn draw_error(frame: &mut Frame<'_>, message: &str, area: Rect) {
    let widget = Paragraph::new(message.to_string())
        .style(Style::default().fg(STATUS_ERROR))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(STATUS_ERROR))
                .title(" Load failed "),
        );
    frame.render_widget(widget, area);
}

/// A one-line band vertically centered inside `area`.
fn centered_line(area: Rect) -> Rect {
    Rect {
        x: area.x,
        y: area.y + area.height / 2,
        width: area.width,
        height: 1.min(area.height),
    }
}

fn selectable_list(frame: &mut Frame<'_>, items: Vec<ListItem<'_>>, selected: usize, area: Rect) {
    let list = List::new(items)
        .highlight_style(
            Style::default()
                .bg(ACTIVE_HIGHLIGHT)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("│ ");
    let mut state = ListState::default();
    state.select(Some(selected));
    frame.render_stateful_widget(list, area, &mut state);
}

// ----------------------------------------------------------------------
// Home
// ----------------------------------------------------------------------

fn draw_home(frame: &mut Frame<'_>, state: &HomePageState, spinner: &str, area: Rect) {
    match &state.users {
        Resource::Pending => draw_loading(frame, spinner, "Loading users…", area),
        Resource::Failed(message) => draw_error(frame, message, area),
        Resource::Loaded(users) => {
            let items: Vec<ListItem> = users
                .iter()
                .map(|user| {
                    ListItem::new(Line::from(vec![
                        Span::styled(
                            format!("@{:<12}", user.username),
                            Style::default().fg(ACCENT),
                        ),
                        Span::raw(format!(" {}", user.name)),
                        Span::styled(
                            format!("  {} · {}", user.email, user.address.city),
                            Style::default().fg(TEXT_DIM),
                        ),
                    ]))
                })
                .collect();

            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER))
                .title(format!(" Users ({}) ", users.len()));
            let inner = block.inner(area);
            frame.render_widget(block, area);
            selectable_list(frame, items, state.selected, inner);
        }
    }
}

// ----------------------------------------------------------------------
// User detail
// ----------------------------------------------------------------------

fn draw_user(
    frame: &mut Frame<'_>,
    state: &UserPageState,
    favorites: &FavoritesStore,
    spinner: &str,
    area: Rect,
) {
    match state.phase() {
        PagePhase::Loading => {
            draw_loading(frame, spinner, "Loading user…", area);
            return;
        }
        PagePhase::Failed(message) => {
            draw_error(frame, message, area);
            return;
        }
        PagePhase::Ready => {}
    }
    let Some(user) = state.user.loaded() else {
        return;
    };

    let (left, right) = split_detail(area);

    let info = vec![
        Line::from(Span::styled(
            user.name.clone(),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("@{}", user.username),
            Style::default().fg(ACCENT),
        )),
        Line::from(""),
        Line::from(format!("✉ {}", user.email)),
        Line::from(format!("☎ {}", user.phone)),
        Line::from(format!("🌐 {}", user.website)),
        Line::from(format!("⌂ {}, {}", user.address.street, user.address.city)),
        Line::from(format!("🏢 {}", user.company.name)),
        Line::from(Span::styled(
            format!("  \"{}\"", user.company.catch_phrase),
            Style::default().fg(TEXT_DIM),
        )),
    ];
    let card = Paragraph::new(info).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER))
            .title(" User "),
    );
    frame.render_widget(card, left);

    // Tab strip plus the active tab's list underneath.
    let tabs_area = Rect {
        x: right.x,
        y: right.y,
        width: right.width,
        height: 2.min(right.height),
    };
    let list_area = Rect {
        x: right.x,
        y: right.y + tabs_area.height,
        width: right.width,
        height: right.height.saturating_sub(tabs_area.height),
    };

    let tabs = Tabs::new(vec!["Posts", "Albums", "Todos"])
        .select(state.tab.index())
        .style(Style::default().fg(TEXT_DIM))
        .highlight_style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD));
    frame.render_widget(tabs, tabs_area);

    match state.tab {
        UserTab::Posts => draw_user_posts(frame, state, favorites, spinner, list_area),
        UserTab::Albums => draw_user_albums(frame, state, spinner, list_area),
        UserTab::Todos => draw_user_todos(frame, state, spinner, list_area),
    }
}

fn draw_user_posts(
    frame: &mut Frame<'_>,
    state: &UserPageState,
    favorites: &FavoritesStore,
    spinner: &str,
    area: Rect,
) {
    match &state.posts {
        Resource::Pending => draw_loading(frame, spinner, "Loading posts…", area),
        Resource::Failed(message) => draw_error(frame, message, area),
        Resource::Loaded(posts) => {
            let items: Vec<ListItem> = posts
                .iter()
                .map(|post| {
                    let heart = if favorites.is_post_favorite(post.id) {
                        Span::styled("♥ ", Style::default().fg(FAVORITE))
                    } else {
                        Span::styled("♡ ", Style::default().fg(TEXT_DIM))
                    };
                    ListItem::new(Line::from(vec![heart, Span::raw(post.title.clone())]))
                })
                .collect();
            selectable_list(frame, items, state.selected, area);
        }
    }
}

fn draw_user_albums(frame: &mut Frame<'_>, state: &UserPageState, spinner: &str, area: Rect) {
    match &state.albums {
        Resource::Pending => draw_loading(frame, spinner, "Loading albums…", area),
        Resource::Failed(message) => draw_error(frame, message, area),
        Resource::Loaded(albums) => {
            let items: Vec<ListItem> = albums
                .iter()
                .map(|album| ListItem::new(format!("⊞ {}", album.title)))
                .collect();
            selectable_list(frame, items, state.selected, area);
        }
    }
}

fn draw_user_todos(frame: &mut Frame<'_>, state: &UserPageState, spinner: &str, area: Rect) {
    match &state.todos {
        Resource::Pending => draw_loading(frame, spinner, "Loading todos…", area),
        Resource::Failed(message) => draw_error(frame, message, area),
        Resource::Loaded(todos) => {
            let items: Vec<ListItem> = todos
                .iter()
                .map(|todo| {
                    let (mark, style) = if todo.completed {
                        ("[x]", Style::default().fg(STATUS_OK))
                    } else {
                        ("[ ]", Style::default().fg(STATUS_WARN))
                    };
                    ListItem::new(Line::from(vec![
                        Span::styled(format!("{mark} "), style),
                        Span::raw(todo.title.clone()),
                    ]))
                })
                .collect();
            selectable_list(frame, items, state.selected, area);
        }
    }
}

// ----------------------------------------------------------------------
// Post detail
// ----------------------------------------------------------------------

fn draw_post(
    frame: &mut Frame<'_>,
    state: &PostPageState,
    favorites: &FavoritesStore,
    spinner: &str,
    area: Rect,
) {
    match state.phase() {
        PagePhase::Loading => {
            draw_loading(frame, spinner, "Loading post…", area);
            return;
        }
        PagePhase::Failed(message) => {
            draw_error(frame, message, area);
            return;
        }
        PagePhase::Ready => {}
    }
    let (Some(post), Some(author)) = (state.post.loaded(), state.author.loaded()) else {
        return;
    };

    let heart = if favorites.is_post_favorite(post.id) {
        Span::styled("♥ ", Style::default().fg(FAVORITE))
    } else {
        Span::styled("♡ ", Style::default().fg(TEXT_DIM))
    };

    let mut lines = vec![
        Line::from(vec![
            heart,
            Span::styled(
                post.title.clone(),
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            format!("{} (@{})", author.name, author.username),
            Style::default().fg(ACCENT),
        )),
        Line::from(""),
        Line::from(post.body.clone()),
        Line::from(""),
    ];

    match &state.comments {
        Resource::Pending => lines.push(Line::from(Span::styled(
            format!("{spinner} Loading comments…"),
            Style::default().fg(TEXT_DIM),
        ))),
        Resource::Failed(message) => lines.push(Line::from(Span::styled(
            format!("Comments unavailable: {message}"),
            Style::default().fg(STATUS_ERROR),
        ))),
        Resource::Loaded(comments) => {
            lines.push(Line::from(Span::styled(
                format!("Comments ({})", comments.len()),
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
            )));
            for comment in comments {
                lines.push(Line::from(""));
                lines.push(Line::from(vec![
                    Span::styled(comment.name.clone(), Style::default().fg(ACCENT)),
                    Span::styled(
                        format!("  {}", comment.email),
                        Style::default().fg(TEXT_DIM),
                    ),
                ]));
                lines.push(Line::from(comment.body.clone()));
            }
        }
    }

    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((state.scroll, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER))
                .title(" Post "),
        );
    frame.render_widget(widget, area);
}

// ----------------------------------------------------------------------
// Album detail
// ----------------------------------------------------------------------

fn draw_album(
    frame: &mut Frame<'_>,
    state: &AlbumPageState,
    favorites: &FavoritesStore,
    spinner: &str,
    area: Rect,
) {
    match state.phase() {
        PagePhase::Loading => {
            draw_loading(frame, spinner, "Loading album…", area);
            return;
        }
        PagePhase::Failed(message) => {
            draw_error(frame, message, area);
            return;
        }
        PagePhase::Ready => {}
    }
    let (Some(album), Some(owner)) = (state.album.loaded(), state.owner.loaded()) else {
        return;
    };

    let title = format!(" {} — {} (@{}) ", album.title, owner.name, owner.username);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER))
        .title(title);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    match &state.photos {
        Resource::Pending => draw_loading(frame, spinner, "Loading photos…", inner),
        Resource::Failed(message) => draw_error(frame, message, inner),
        Resource::Loaded(photos) => {
            let items: Vec<ListItem> = photos
                .iter()
                .map(|photo| {
                    let heart = if favorites.is_photo_favorite(photo.id) {
                        Span::styled("♥ ", Style::default().fg(FAVORITE))
                    } else {
                        Span::styled("♡ ", Style::default().fg(TEXT_DIM))
                    };
                    ListItem::new(Line::from(vec![
                        heart,
                        Span::raw(photo.title.clone()),
                        Span::styled(format!("  {}", photo.url), Style::default().fg(TEXT_DIM)),
                    ]))
                })
                .collect();
            selectable_list(frame, items, state.selected, inner);
        }
    }
}

// ----------------------------------------------------------------------
// Favorites
// ----------------------------------------------------------------------

fn draw_favorites(
    frame: &mut Frame<'_>,
    state: &FavoritesPageState,
    favorites: &FavoritesStore,
    area: Rect,
) {
    let top_height = area.height / 2;
    let photos_area = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: top_height,
    };
    let posts_area = Rect {
        x: area.x,
        y: area.y + top_height,
        width: area.width,
        height: area.height.saturating_sub(top_height),
    };

    let photos = favorites.photos();
    let posts = favorites.posts();

    let section_block = |title: String, active: bool| {
        let border = if active { ACCENT } else { GLOBAL_BORDER };
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title(title)
    };

    let photos_active = state.section == FavoritesSection::Photos;
    let block = section_block(format!(" ♥ Photos ({}) ", photos.len()), photos_active);
    let inner = block.inner(photos_area);
    frame.render_widget(block, photos_area);
    if photos.is_empty() {
        let empty = Paragraph::new("No favorite photos yet.").style(Style::default().fg(TEXT_DIM));
        frame.render_widget(empty, inner);
    } else {
        let items: Vec<ListItem> = photos
            .iter()
            .map(|photo| {
                ListItem::new(Line::from(vec![
                    Span::raw(photo.title.clone()),
                    Span::styled(
                        format!("  album {} · {}", photo.album_id, photo.thumbnail_url),
                        Style::default().fg(TEXT_DIM),
                    ),
                ]))
            })
            .collect();
        let selected = if photos_active { state.selected } else { 0 };
        selectable_list(frame, items, selected, inner);
    }

    let block = section_block(format!(" ♥ Posts ({}) ", posts.len()), !photos_active);
    let inner = block.inner(posts_area);
    frame.render_widget(block, posts_area);
    if posts.is_empty() {
        let empty = Paragraph::new("No favorite posts yet.").style(Style::default().fg(TEXT_DIM));
        frame.render_widget(empty, inner);
    } else {
        let items: Vec<ListItem> = posts
            .iter()
            .map(|post| {
                let preview: String = post.body.chars().take(60).collect();
                ListItem::new(Line::from(vec![
                    Span::raw(post.title.clone()),
                    Span::styled(format!("  {preview}…"), Style::default().fg(TEXT_DIM)),
                ]))
            })
            .collect();
        let selected = if photos_active { 0 } else { state.selected };
        selectable_list(frame, items, selected, inner);
    }
}
