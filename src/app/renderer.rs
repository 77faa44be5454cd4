// src/app/renderer.rs
//! GameApp の描画関連ロジック。
//! ピラミッドを上の段から順に描いて、下の段が手前に重なるようにするよ。

use log::debug;
use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use crate::app::layout_calculator::{pyramid_card_rect, stock_rect, waste_rect, CardRect};
use crate::app::session::GameSession;
use crate::components::card::{Card, Suit, ALL_SUITS};
use crate::components::position::PyramidPosition;
use crate::components::selection::CardSource;
use crate::config::assets;
use crate::config::layout::{
    BANNER_FONT, BLACK_SUIT_COLOR, CARD_BACK_COLOR, CARD_BORDER_COLOR, CARD_FACE_COLOR,
    EMPTY_SLOT_COLOR, LABEL_FONT, RED_SUIT_COLOR, SELECTED_COLOR, SYMBOL_FONT, TABLE_COLOR,
};

/// 画像アセット一式。読み込みが終わってない画像は使わずに図形で代わりに描く。
pub struct CardAssets {
    emblems: Vec<(Suit, HtmlImageElement)>,
    card_back: HtmlImageElement,
    empty_slot: HtmlImageElement,
}

impl CardAssets {
    /// 画像の読み込みを始める。読み込みはブラウザ任せで、ここでは待たない。
    pub fn load() -> Result<Self, JsValue> {
        let emblems = ALL_SUITS
            .iter()
            .map(|suit| load_image(&assets::suit_emblem_path(*suit)).map(|image| (*suit, image)))
            .collect::<Result<Vec<_>, JsValue>>()?;
        Ok(Self {
            emblems,
            card_back: load_image(&assets::card_back_path())?,
            empty_slot: load_image(&assets::empty_slot_path())?,
        })
    }

    fn emblem(&self, suit: Suit) -> Option<&HtmlImageElement> {
        self.emblems
            .iter()
            .find(|(emblem_suit, _)| *emblem_suit == suit)
            .map(|(_, image)| image)
            .filter(|image| is_ready(image))
    }

    fn card_back(&self) -> Option<&HtmlImageElement> {
        Some(&self.card_back).filter(|image| is_ready(image))
    }

    fn empty_slot(&self) -> Option<&HtmlImageElement> {
        Some(&self.empty_slot).filter(|image| is_ready(image))
    }
}

fn load_image(src: &str) -> Result<HtmlImageElement, JsValue> {
    let image = HtmlImageElement::new()?;
    image.set_src(src);
    Ok(image)
}

fn is_ready(image: &HtmlImageElement) -> bool {
    image.complete() && image.natural_width() > 0
}

/// 画面全体を描き直す。
pub fn render_game(
    session: &GameSession,
    canvas: &HtmlCanvasElement,
    context: &CanvasRenderingContext2d,
    assets: &CardAssets,
) -> Result<(), JsValue> {
    let canvas_width = canvas.width() as f64;
    let canvas_height = canvas.height() as f64;

    context.set_fill_style_str(TABLE_COLOR);
    context.fill_rect(0.0, 0.0, canvas_width, canvas_height);

    let field = session.field();
    let selection = session.selection();

    // --- ピラミッド ---
    for position in PyramidPosition::all() {
        let Some(card) = field.pyramid_card(position) else {
            continue;
        };
        let rect = pyramid_card_rect(position);
        if card.is_blocked() {
            draw_card_back(context, &rect, assets)?;
        } else {
            draw_card_face(context, &rect, card, assets)?;
        }
        if selection.contains_source(CardSource::Pyramid(position)) {
            draw_highlight(context, &rect);
        }
    }

    // --- 山札 ---
    let stock = stock_rect();
    if field.draw_pile().is_empty() {
        draw_empty_slot(context, &stock, assets)?;
    } else {
        draw_card_back(context, &stock, assets)?;
    }

    // --- 捨て札 ---
    let waste = waste_rect();
    match field.waste_pile().top() {
        Some(card) => {
            draw_card_face(context, &waste, card, assets)?;
            if selection.contains_source(CardSource::Waste) {
                draw_highlight(context, &waste);
            }
        }
        None => draw_empty_slot(context, &waste, assets)?,
    }

    if session.is_won() {
        draw_win_banner(context, canvas_width, canvas_height)?;
    }

    debug!(
        "Rendered {} pyramid cards, {} selected",
        field.remaining_pyramid_cards(),
        selection.len()
    );
    Ok(())
}

fn draw_card_face(
    context: &CanvasRenderingContext2d,
    rect: &CardRect,
    card: &Card,
    assets: &CardAssets,
) -> Result<(), JsValue> {
    context.set_fill_style_str(CARD_FACE_COLOR);
    context.fill_rect(rect.x, rect.y, rect.width, rect.height);
    draw_border(context, rect, CARD_BORDER_COLOR, 1.0);

    let suit = card.suit();
    let color = if suit.is_red() { RED_SUIT_COLOR } else { BLACK_SUIT_COLOR };
    context.set_fill_style_str(color);
    context.set_text_align("left");
    context.set_text_baseline("top");
    context.set_font(LABEL_FONT);
    context.fill_text(card.rank().label(), rect.x + 6.0, rect.y + 6.0)?;

    // 下の段が重なるのはカードの下半分。数字は上の隅に置く
    let size = rect.width * 0.5;
    let emblem_x = rect.x + (rect.width - size) / 2.0;
    let emblem_y = rect.y + rect.height - size - 8.0;
    match assets.emblem(suit) {
        Some(image) => {
            context.draw_image_with_html_image_element_and_dw_and_dh(image, emblem_x, emblem_y, size, size)?
        }
        None => {
            context.set_text_align("center");
            context.set_text_baseline("middle");
            context.set_font(SYMBOL_FONT);
            context.fill_text(
                &suit.symbol().to_string(),
                rect.x + rect.width / 2.0,
                emblem_y + size / 2.0,
            )?;
        }
    }
    Ok(())
}

fn draw_card_back(
    context: &CanvasRenderingContext2d,
    rect: &CardRect,
    assets: &CardAssets,
) -> Result<(), JsValue> {
    match assets.card_back() {
        Some(image) => context
            .draw_image_with_html_image_element_and_dw_and_dh(image, rect.x, rect.y, rect.width, rect.height)?,
        None => {
            context.set_fill_style_str(CARD_BACK_COLOR);
            context.fill_rect(rect.x, rect.y, rect.width, rect.height);
        }
    }
    draw_border(context, rect, CARD_BORDER_COLOR, 1.0);
    Ok(())
}

fn draw_empty_slot(
    context: &CanvasRenderingContext2d,
    rect: &CardRect,
    assets: &CardAssets,
) -> Result<(), JsValue> {
    match assets.empty_slot() {
        Some(image) => context
            .draw_image_with_html_image_element_and_dw_and_dh(image, rect.x, rect.y, rect.width, rect.height)?,
        None => draw_border(context, rect, EMPTY_SLOT_COLOR, 2.0),
    }
    Ok(())
}

fn draw_highlight(context: &CanvasRenderingContext2d, rect: &CardRect) {
    draw_border(context, rect, SELECTED_COLOR, 4.0);
}

fn draw_border(context: &CanvasRenderingContext2d, rect: &CardRect, color: &str, width: f64) {
    context.set_stroke_style_str(color);
    context.set_line_width(width);
    context.stroke_rect(rect.x, rect.y, rect.width, rect.height);
}

fn draw_win_banner(
    context: &CanvasRenderingContext2d,
    canvas_width: f64,
    canvas_height: f64,
) -> Result<(), JsValue> {
    context.set_fill_style_str(SELECTED_COLOR);
    context.set_font(BANNER_FONT);
    context.set_text_align("center");
    context.set_text_baseline("middle");
    context.fill_text("You win!", canvas_width / 2.0, canvas_height / 2.0)
}
