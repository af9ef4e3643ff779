use ratatui::{Frame, layout::Rect, widgets::Clear};

/// Rect directly under `anchor`, same width, clipped to the bottom of `frame_area`.
pub fn popup_below_anchor(anchor: Rect, height: u16, frame_area: Rect) -> Rect {
    let popup_y = anchor.y.saturating_add(anchor.height);
    let frame_bottom = frame_area.y.saturating_add(frame_area.height);
    let available = frame_bottom.saturating_sub(popup_y);

    Rect {
        x: anchor.x,
        y: popup_y.min(frame_bottom),
        width: anchor.width,
        height: height.min(available),
    }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}
