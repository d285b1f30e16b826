// SSD1306 Display-Adapter
//
// Stellt das 128x64 OLED als 16x2 Zeichen-Raster dar (8x13 Font).
// Spalte 15 ist über beide Zeilen für das Trend-Glyph reserviert.

use embedded_graphics::{
    mono_font::{MonoTextStyle, MonoTextStyleBuilder, iso_8859_1::FONT_8X13},
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle, Triangle},
    text::{Baseline, Text},
};
use esp_core::{CharacterScreen, ScreenError, TrendGlyph};
use ssd1306::{Ssd1306, mode::BufferedGraphicsMode, prelude::*};

/// Zeichenbreite des 8x13 Fonts in Pixeln
const CHAR_WIDTH: i32 = 8;
/// Zeilenabstand in Pixeln (13 hoch + 3 Luft)
const LINE_PITCH: i32 = 16;
/// Linke Pixelkante des Trend-Felds (Zeichen-Spalte 15)
const GLYPH_LEFT: i32 = 15 * CHAR_WIDTH;
/// Höhe des Trend-Felds: beide genutzten Zeilen
const GLYPH_HEIGHT: u32 = 2 * LINE_PITCH as u32;

/// SSD1306 im Buffered-Graphics-Modus hinter dem CharacterScreen-Trait
///
/// Generisch über das Display-Interface (I2C in Production); der
/// ISO-8859-1 Font liefert das Grad-Zeichen für die Wertezeile.
pub struct OledScreen<DI> {
    display: Ssd1306<DI, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>,
    text_style: MonoTextStyle<'static, BinaryColor>,
}

impl<DI> OledScreen<DI>
where
    DI: WriteOnlyDataCommand,
{
    /// Initialisiert das Display und den Text-Stil
    pub fn new(interface: DI) -> Result<Self, ScreenError> {
        let mut display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
            .into_buffered_graphics_mode();
        display.init().map_err(|_| ScreenError::DrawFailed)?;

        // Hintergrund wird mitgezeichnet: Überschreiben alter Inhalte
        // braucht kein vorheriges Löschen
        let text_style = MonoTextStyleBuilder::new()
            .font(&FONT_8X13)
            .text_color(BinaryColor::On)
            .background_color(BinaryColor::Off)
            .build();

        Ok(Self {
            display,
            text_style,
        })
    }
}

impl<DI> CharacterScreen for OledScreen<DI>
where
    DI: WriteOnlyDataCommand,
{
    fn write_text(&mut self, row: u8, col: u8, text: &str) -> Result<(), ScreenError> {
        let origin = Point::new(i32::from(col) * CHAR_WIDTH, i32::from(row) * LINE_PITCH);
        Text::with_baseline(text, origin, self.text_style, Baseline::Top)
            .draw(&mut self.display)
            .map_err(|_| ScreenError::DrawFailed)?;
        Ok(())
    }

    fn draw_trend(&mut self, glyph: TrendGlyph) -> Result<(), ScreenError> {
        // Feld immer erst leeren, dann das Glyph darüber zeichnen
        Rectangle::new(
            Point::new(GLYPH_LEFT, 0),
            Size::new(CHAR_WIDTH as u32, GLYPH_HEIGHT),
        )
        .into_styled(PrimitiveStyle::with_fill(BinaryColor::Off))
        .draw(&mut self.display)
        .map_err(|_| ScreenError::DrawFailed)?;

        let fill = PrimitiveStyle::with_fill(BinaryColor::On);
        match glyph {
            TrendGlyph::Up => {
                Triangle::new(
                    Point::new(GLYPH_LEFT + 3, 8),
                    Point::new(GLYPH_LEFT, 20),
                    Point::new(GLYPH_LEFT + 7, 20),
                )
                .into_styled(fill)
                .draw(&mut self.display)
                .map_err(|_| ScreenError::DrawFailed)?;
            }
            TrendGlyph::Down => {
                Triangle::new(
                    Point::new(GLYPH_LEFT, 12),
                    Point::new(GLYPH_LEFT + 7, 12),
                    Point::new(GLYPH_LEFT + 3, 24),
                )
                .into_styled(fill)
                .draw(&mut self.display)
                .map_err(|_| ScreenError::DrawFailed)?;
            }
            TrendGlyph::Equal => {
                for y in [13, 19] {
                    Rectangle::new(Point::new(GLYPH_LEFT, y), Size::new(CHAR_WIDTH as u32, 3))
                        .into_styled(fill)
                        .draw(&mut self.display)
                        .map_err(|_| ScreenError::DrawFailed)?;
                }
            }
            TrendGlyph::Blank => {}
        }

        Ok(())
    }

    fn clear(&mut self) -> Result<(), ScreenError> {
        self.display.clear_buffer();
        Ok(())
    }

    fn flush(&mut self) -> Result<(), ScreenError> {
        self.display.flush().map_err(|_| ScreenError::DrawFailed)
    }
}
