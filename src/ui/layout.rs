use ratatui::layout::Rect;

/// Split the frame into header, body, footer bands.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Horizontal split used by the user page: info card | tabbed lists.
pub fn split_detail(area: Rect) -> (Rect, Rect) {
    let left_width = (area.width * 2 / 5).min(area.width);
    let left = Rect {
        x: area.x,
        y: area.y,
        width: left_width,
        height: area.height,
    };
    let right = Rect {
        x: area.x + left_width,
        y: area.y,
        width: area.width.saturating_sub(left_width),
        height: area.height,
    };
    (left, right)
}
