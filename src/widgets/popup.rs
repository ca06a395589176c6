use ratatui::{Frame, layout::Rect, widgets::Clear};

pub fn centered_popup(frame_area: Rect, width: u16, height: u16) -> Rect {
    let popup_width = width.min(frame_area.width);
    let popup_height = height.min(frame_area.height);

    let popup_x = frame_area.x + (frame_area.width.saturating_sub(popup_width)) / 2;
    let popup_y = frame_area.y + (frame_area.height.saturating_sub(popup_height)) / 2;

    Rect {
        x: popup_x,
        y: popup_y,
        width: popup_width,
        height: popup_height,
    }
}

/// Rect of the given size flush against the right edge, `margin` cells in,
/// starting at row `y`
pub fn top_right(frame_area: Rect, width: u16, height: u16, margin: u16, y: u16) -> Rect {
    let width = width.min(frame_area.width.saturating_sub(margin * 2));
    let x = frame_area
        .right()
        .saturating_sub(margin)
        .saturating_sub(width)
        .max(frame_area.x);
    let height = height.min(frame_area.bottom().saturating_sub(y));

    Rect {
        x,
        y,
        width,
        height,
    }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_popup_basic() {
        let frame = Rect {
            x: 0,
            y: 0,
            width: 100,
            height: 50,
        };

        let popup = centered_popup(frame, 40, 20);

        assert_eq!(popup.x, 30);
        assert_eq!(popup.y, 15);
        assert_eq!(popup.width, 40);
        assert_eq!(popup.height, 20);
    }

    #[test]
    fn test_centered_popup_too_large_is_clamped() {
        let frame = Rect {
            x: 0,
            y: 0,
            width: 100,
            height: 50,
        };

        let popup = centered_popup(frame, 200, 100);

        assert_eq!(popup.width, 100);
        assert_eq!(popup.height, 50);
        assert_eq!(popup.x, 0);
        assert_eq!(popup.y, 0);
    }

    #[test]
    fn test_centered_popup_respects_offset_origin() {
        let frame = Rect {
            x: 10,
            y: 4,
            width: 40,
            height: 20,
        };

        let popup = centered_popup(frame, 20, 10);

        assert_eq!(popup.x, 20);
        assert_eq!(popup.y, 9);
    }

    #[test]
    fn test_top_right_basic() {
        let frame = Rect::new(0, 0, 80, 24);

        let area = top_right(frame, 20, 3, 2, 2);

        assert_eq!(area.x, 58); // 80 - 2 - 20
        assert_eq!(area.y, 2);
        assert_eq!(area.width, 20);
        assert_eq!(area.height, 3);
    }

    #[test]
    fn test_top_right_clamps_width_to_frame() {
        let frame = Rect::new(0, 0, 10, 24);

        let area = top_right(frame, 50, 3, 2, 2);

        assert_eq!(area.width, 6);
        assert_eq!(area.x, 2);
    }

    #[test]
    fn test_top_right_clamps_height_at_bottom() {
        let frame = Rect::new(0, 0, 80, 10);

        let area = top_right(frame, 20, 3, 2, 9);

        assert_eq!(area.height, 1);
    }
}
