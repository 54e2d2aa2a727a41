use crate::buffer::{Buffer, Cell};
use crate::element::{Content, Element};
use crate::layout::{LayoutResult, Rect};
use crate::text::{char_width, truncate_to_width};
use crate::types::{Border, Rgb, Style, TextStyle};

const DEFAULT_FG: Rgb = Rgb::new(255, 255, 255);
const CURSOR_FG: Rgb = Rgb::new(30, 30, 30);
const CURSOR_BG: Rgb = Rgb::new(215, 215, 215);

pub fn render_to_buffer(root: &Element, layout: &LayoutResult, buf: &mut Buffer) {
    render_element(root, layout, buf);
}

fn render_element(element: &Element, layout: &LayoutResult, buf: &mut Buffer) {
    let Some(rect) = layout.get(&element.id) else {
        return;
    };

    let style = effective_style(element);

    if let Some(bg) = &style.background {
        fill_rect(buf, *rect, bg.to_rgb());
    }

    render_border(style, *rect, buf);

    match &element.content {
        Content::None => {}
        Content::Text(text) => {
            render_text(text, element, style, *rect, buf);
        }
        Content::TextInput {
            value,
            cursor,
            placeholder,
            focused,
        } => {
            render_text_input(
                value,
                *cursor,
                placeholder.as_deref(),
                *focused,
                element,
                style,
                *rect,
                buf,
            );
        }
        Content::Children(children) => {
            for child in children {
                render_element(child, layout, buf);
            }
        }
    }
}

fn effective_style(element: &Element) -> &Style {
    if element.focused {
        element.style_focused.as_ref().unwrap_or(&element.style)
    } else {
        &element.style
    }
}

fn fill_rect(buf: &mut Buffer, rect: Rect, bg: Rgb) {
    for y in rect.y..rect.bottom().min(buf.height()) {
        for x in rect.x..rect.right().min(buf.width()) {
            if let Some(cell) = buf.get_mut(x, y) {
                cell.char = ' ';
                cell.bg = bg;
            }
        }
    }
}

fn inner_rect(element: &Element, style: &Style, rect: Rect) -> Rect {
    let border = if style.border == Border::None { 0 } else { 1 };
    rect.shrink(
        element.padding.top + border,
        element.padding.right + border,
        element.padding.bottom + border,
        element.padding.left + border,
    )
}

fn render_text(text: &str, element: &Element, style: &Style, rect: Rect, buf: &mut Buffer) {
    let fg = style
        .foreground
        .as_ref()
        .map(|c| c.to_rgb())
        .unwrap_or(DEFAULT_FG);
    let explicit_bg = style.background.as_ref().map(|c| c.to_rgb());

    let inner = inner_rect(element, style, rect);
    if inner.is_empty() {
        return;
    }

    for (row, line) in text.lines().enumerate() {
        let y = inner.y + row as u16;
        if y >= inner.bottom() {
            break;
        }

        let line = truncate_to_width(line, inner.width as usize);
        let mut x = inner.x;
        for ch in line.chars() {
            if x >= inner.right() {
                break;
            }

            // Preserve existing background if none set explicitly
            let bg = explicit_bg
                .unwrap_or_else(|| buf.get(x, y).map(|c| c.bg).unwrap_or_default());

            buf.set(
                x,
                y,
                Cell::new(ch)
                    .with_fg(fg)
                    .with_bg(bg)
                    .with_style(style.text_style),
            );
            x += char_width(ch).max(1) as u16;
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn render_text_input(
    value: &str,
    cursor: usize,
    placeholder: Option<&str>,
    focused: bool,
    element: &Element,
    style: &Style,
    rect: Rect,
    buf: &mut Buffer,
) {
    let fg = style
        .foreground
        .as_ref()
        .map(|c| c.to_rgb())
        .unwrap_or(DEFAULT_FG);
    let explicit_bg = style.background.as_ref().map(|c| c.to_rgb());

    let inner = inner_rect(element, style, rect);
    if inner.is_empty() {
        return;
    }
    let y = inner.y;

    // Show the placeholder only when empty and not focused
    let is_placeholder = value.is_empty() && !focused;
    let display_text = if is_placeholder {
        placeholder.unwrap_or("")
    } else {
        value
    };

    let mut text_style = style.text_style;
    if is_placeholder {
        text_style.dim = true;
    }

    // Scroll horizontally to keep the cursor in view
    let visible = inner.width as usize;
    let scroll = if focused && visible > 0 && cursor + 1 > visible {
        cursor + 1 - visible
    } else {
        0
    };

    let chars: Vec<char> = display_text.chars().collect();
    let mut x = inner.x;

    for (i, &ch) in chars.iter().enumerate().skip(scroll) {
        if x >= inner.right() {
            break;
        }

        let bg =
            explicit_bg.unwrap_or_else(|| buf.get(x, y).map(|c| c.bg).unwrap_or_default());
        let at_cursor = focused && i == cursor;
        let cell = if at_cursor {
            Cell::new(ch).with_fg(CURSOR_FG).with_bg(CURSOR_BG)
        } else {
            Cell::new(ch)
                .with_fg(fg)
                .with_bg(bg)
                .with_style(text_style)
        };

        buf.set(x, y, cell);
        x += char_width(ch).max(1) as u16;
    }

    // Cursor sits past the end of the text
    if focused && cursor >= chars.len() && x < inner.right() {
        buf.set(
            x,
            y,
            Cell::new(' ')
                .with_fg(CURSOR_FG)
                .with_bg(CURSOR_BG)
                .with_style(TextStyle::new()),
        );
    }
}

fn render_border(style: &Style, rect: Rect, buf: &mut Buffer) {
    let (tl, tr, bl, br, h, v) = match style.border {
        Border::None => return,
        Border::Single => ('┌', '┐', '└', '┘', '─', '│'),
        Border::Double => ('╔', '╗', '╚', '╝', '═', '║'),
        Border::Rounded => ('╭', '╮', '╰', '╯', '─', '│'),
        Border::Thick => ('┏', '┓', '┗', '┛', '━', '┃'),
    };

    let fg = style
        .foreground
        .as_ref()
        .map(|c| c.to_rgb())
        .unwrap_or(DEFAULT_FG);

    if rect.width < 2 || rect.height < 2 {
        return;
    }

    // Corners
    set_char(buf, rect.x, rect.y, tl, fg);
    set_char(buf, rect.right() - 1, rect.y, tr, fg);
    set_char(buf, rect.x, rect.bottom() - 1, bl, fg);
    set_char(buf, rect.right() - 1, rect.bottom() - 1, br, fg);

    // Horizontal lines
    for x in (rect.x + 1)..(rect.right() - 1) {
        set_char(buf, x, rect.y, h, fg);
        set_char(buf, x, rect.bottom() - 1, h, fg);
    }

    // Vertical lines
    for y in (rect.y + 1)..(rect.bottom() - 1) {
        set_char(buf, rect.x, y, v, fg);
        set_char(buf, rect.right() - 1, y, v, fg);
    }
}

fn set_char(buf: &mut Buffer, x: u16, y: u16, ch: char, fg: Rgb) {
    if let Some(cell) = buf.get_mut(x, y) {
        cell.char = ch;
        cell.fg = fg;
        // Preserve existing background
    }
}
