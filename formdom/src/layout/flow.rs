use std::collections::HashMap;

use super::Rect;
use crate::element::{Content, Element};
use crate::text::display_width;
use crate::types::{Border, Direction, Size};

pub type LayoutResult = HashMap<String, Rect>;

/// Lay out the element tree within the available area.
///
/// Containers stack their children along `direction`, separated by `gap` and
/// inset by padding and border. `Size::Auto` measures content, `Size::Fill`
/// splits the remaining main-axis space between the fill children.
pub fn layout(root: &Element, available: Rect) -> LayoutResult {
    let mut result = LayoutResult::new();
    layout_element(root, available, &mut result);
    result
}

fn layout_element(element: &Element, available: Rect, result: &mut LayoutResult) {
    let width = resolve_size(element.width, available.width, element, true);
    let height = resolve_size(element.height, available.height, element, false);
    let rect = Rect::new(available.x, available.y, width, height);
    result.insert(element.id.clone(), rect);
    layout_children(element, rect, result);
}

fn layout_children(element: &Element, rect: Rect, result: &mut LayoutResult) {
    let Content::Children(children) = &element.content else {
        return;
    };

    if children.is_empty() {
        return;
    }

    let border = border_size(element);
    let inner = rect.shrink(
        element.padding.top + border,
        element.padding.right + border,
        element.padding.bottom + border,
        element.padding.left + border,
    );

    let is_row = element.direction == Direction::Row;
    let main_size = if is_row { inner.width } else { inner.height };
    let cross_size = if is_row { inner.height } else { inner.width };
    let gap_total = element.gap * children.len().saturating_sub(1) as u16;

    // First pass: measure fixed and content-sized children, count fills.
    let mut taken = 0u16;
    let mut fill_count = 0u16;
    for child in children {
        match main_axis(child, is_row) {
            Size::Fixed(n) => taken += n,
            Size::Auto => taken += estimate_size(child, is_row),
            Size::Fill => fill_count += 1,
        }
    }

    let fill_size = if fill_count > 0 {
        main_size.saturating_sub(taken + gap_total) / fill_count
    } else {
        0
    };

    // Second pass: assign rects in flow order.
    let mut offset = 0u16;
    for child in children {
        let main = match main_axis(child, is_row) {
            Size::Fixed(n) => n,
            Size::Auto => estimate_size(child, is_row),
            Size::Fill => fill_size,
        };
        let main = main.min(main_size.saturating_sub(offset));

        let cross = match cross_axis(child, is_row) {
            Size::Fixed(n) => n.min(cross_size),
            Size::Auto => estimate_size(child, !is_row).min(cross_size),
            Size::Fill => cross_size,
        };

        let child_rect = if is_row {
            Rect::new(inner.x + offset, inner.y, main, cross)
        } else {
            Rect::new(inner.x, inner.y + offset, cross, main)
        };

        result.insert(child.id.clone(), child_rect);
        layout_children(child, child_rect, result);

        offset += main + element.gap;
    }
}

fn main_axis(element: &Element, is_row: bool) -> Size {
    if is_row {
        element.width
    } else {
        element.height
    }
}

fn cross_axis(element: &Element, is_row: bool) -> Size {
    if is_row {
        element.height
    } else {
        element.width
    }
}

fn resolve_size(size: Size, available: u16, element: &Element, is_width: bool) -> u16 {
    match size {
        Size::Fixed(n) => n.min(available),
        Size::Fill => available,
        Size::Auto => estimate_size(element, is_width).min(available),
    }
}

fn border_size(element: &Element) -> u16 {
    if element.style.border == Border::None {
        0
    } else {
        1
    }
}

/// Estimate the intrinsic size of an element along one axis.
fn estimate_size(element: &Element, is_width: bool) -> u16 {
    let chrome = 2 * border_size(element)
        + if is_width {
            element.padding.horizontal_total()
        } else {
            element.padding.vertical_total()
        };

    let content = match &element.content {
        Content::None => 0,
        Content::Text(text) => {
            if is_width {
                text.lines()
                    .map(|line| display_width(line) as u16)
                    .max()
                    .unwrap_or(0)
            } else {
                text.lines().count().max(1) as u16
            }
        }
        Content::TextInput {
            value, placeholder, ..
        } => {
            if is_width {
                let ph = placeholder.as_deref().unwrap_or("");
                display_width(value).max(display_width(ph)) as u16 + 1
            } else {
                1
            }
        }
        Content::Children(children) => {
            if children.is_empty() {
                0
            } else if (element.direction == Direction::Row) == is_width {
                // Main axis: sum plus gaps.
                let gap_total = element.gap * children.len().saturating_sub(1) as u16;
                children
                    .iter()
                    .map(|c| estimate_size(c, is_width))
                    .sum::<u16>()
                    + gap_total
            } else {
                // Cross axis: max.
                children
                    .iter()
                    .map(|c| estimate_size(c, is_width))
                    .max()
                    .unwrap_or(0)
            }
        }
    };

    content + chrome
}
