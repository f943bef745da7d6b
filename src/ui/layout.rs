use ratatui::layout::Rect;

/// Screen regions, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    pub header: Rect,
    pub input: Rect,
    pub body: Rect,
    pub toast: Rect,
    pub footer: Rect,
}

pub const HEADER_HEIGHT: u16 = 3;
pub const INPUT_HEIGHT: u16 = 3;
pub const TOAST_HEIGHT: u16 = 1;
pub const FOOTER_HEIGHT: u16 = 3;

pub fn layout_regions(area: Rect) -> Regions {
    let mut remaining = area.height;
    let mut take = |want: u16| {
        let got = want.min(remaining);
        remaining -= got;
        got
    };
    let header_height = take(HEADER_HEIGHT);
    let footer_height = take(FOOTER_HEIGHT);
    let input_height = take(INPUT_HEIGHT);
    let toast_height = take(TOAST_HEIGHT);
    let body_height = remaining;

    let mut y = area.y;
    let mut next = |height: u16| {
        let rect = Rect {
            x: area.x,
            y,
            width: area.width,
            height,
        };
        y += height;
        rect
    };

    Regions {
        header: next(header_height),
        input: next(input_height),
        body: next(body_height),
        toast: next(toast_height),
        footer: next(footer_height),
    }
}

/// Split the body into the two result panels (shortened above original).
pub fn result_panels(body: Rect) -> (Rect, Rect) {
    let panel_height = 4.min(body.height / 2);
    let short = Rect {
        x: body.x,
        y: body.y,
        width: body.width,
        height: panel_height,
    };
    let long = Rect {
        x: body.x,
        y: body.y + panel_height,
        width: body.width,
        height: panel_height,
    };
    (short, long)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_stack_without_gaps() {
        let regions = layout_regions(Rect::new(0, 0, 80, 24));
        assert_eq!(regions.header.y, 0);
        assert_eq!(regions.input.y, regions.header.bottom());
        assert_eq!(regions.body.y, regions.input.bottom());
        assert_eq!(regions.toast.y, regions.body.bottom());
        assert_eq!(regions.footer.bottom(), 24);
        assert_eq!(regions.body.height, 24 - 3 - 3 - 1 - 3);
    }

    #[test]
    fn tiny_terminal_keeps_header_and_footer_first() {
        let regions = layout_regions(Rect::new(0, 0, 80, 5));
        assert_eq!(regions.header.height, 3);
        assert_eq!(regions.footer.height, 2);
        assert_eq!(regions.input.height, 0);
        assert_eq!(regions.body.height, 0);
    }

    #[test]
    fn result_panels_fit_in_body() {
        let (short, long) = result_panels(Rect::new(0, 6, 80, 6));
        assert_eq!(short.height, 3);
        assert_eq!(long.y, short.bottom());
        assert!(long.bottom() <= 12);
    }
}
