//! Built-in glyph sets covering printable ASCII (32..=126).
//!
//! Each glyph row is one byte wide, so consecutive rows pack four to a word.

use crate::font::Font;

/// 8x8 glyphs, 2 words per glyph.
pub static FONT_8X8: Font = Font::new(8, 8, 2, &FONT_8X8_DATA);

static FONT_8X8_DATA: [u32; 190] = [
    0x00000000, 0x00000000, // ' '
    0x18181818, 0x18001800, // '!'
    0x6C6C2400, 0x00000000, // '"'
    0x6C6CFE6C, 0xFE6C6C00, // '#'
    0x187EC07C, 0x06FC1800, // '$'
    0x00C6CC18, 0x3066C600, // '%'
    0x386C3876, 0xDCCC7600, // '&'
    0x18183000, 0x00000000, // '\''
    0x0C183030, 0x30180C00, // '('
    0x30180C0C, 0x0C183000, // ')'
    0x00663CFF, 0x3C660000, // '*'
    0x0018187E, 0x18180000, // '+'
    0x00000000, 0x00181830, // ','
    0x0000007E, 0x00000000, // '-'
    0x00000000, 0x00181800, // '.'
    0x060C1830, 0x60C08000, // '/'
    0x7CCEDEF6, 0xE6C67C00, // '0'
    0x18381818, 0x18187E00, // '1'
    0x7CC6067C, 0xC0C0FE00, // '2'
    0xFC06063C, 0x0606FC00, // '3'
    0x0CCCCCCC, 0xFE0C0C00, // '4'
    0xFEC0FC06, 0x06C67C00, // '5'
    0x7CC0C0FC, 0xC6C67C00, // '6'
    0xFE06060C, 0x18181800, // '7'
    0x7CC6C67C, 0xC6C67C00, // '8'
    0x7CC6C67E, 0x06067C00, // '9'
    0x00181800, 0x00181800, // ':'
    0x00181800, 0x00181830, // ';'
    0x0C183060, 0x30180C00, // '<'
    0x00007E00, 0x7E000000, // '='
    0x30180C06, 0x0C183000, // '>'
    0x3C660C18, 0x18001800, // '?'
    0x7CC6DEDE, 0xDEC07E00, // '@'
    0x386CC6C6, 0xFEC6C600, // 'A'
    0xFCC6C6FC, 0xC6C6FC00, // 'B'
    0x7CC6C0C0, 0xC0C67C00, // 'C'
    0xF8CCC6C6, 0xC6CCF800, // 'D'
    0xFEC0C0F8, 0xC0C0FE00, // 'E'
    0xFEC0C0F8, 0xC0C0C000, // 'F'
    0x7CC6C0CE, 0xC6C67C00, // 'G'
    0xC6C6C6FE, 0xC6C6C600, // 'H'
    0x7E181818, 0x18187E00, // 'I'
    0x06060606, 0xC6C67C00, // 'J'
    0xC6CCD8F0, 0xD8CCC600, // 'K'
    0xC0C0C0C0, 0xC0C0FE00, // 'L'
    0xC6EEFED6, 0xC6C6C600, // 'M'
    0xC6E6F6DE, 0xCEC6C600, // 'N'
    0x7CC6C6C6, 0xC6C67C00, // 'O'
    0xFCC6C6FC, 0xC0C0C000, // 'P'
    0x7CC6C6C6, 0xD6DE7C06, // 'Q'
    0xFCC6C6FC, 0xD8CCC600, // 'R'
    0x7CC6C07C, 0x06C67C00, // 'S'
    0x7E181818, 0x18181800, // 'T'
    0xC6C6C6C6, 0xC6C67C00, // 'U'
    0xC6C6C6C6, 0x6C381000, // 'V'
    0xC6C6C6D6, 0xFEEEC600, // 'W'
    0xC6C66C38, 0x6CC6C600, // 'X'
    0x6666663C, 0x18181800, // 'Y'
    0xFE060C18, 0x3060FE00, // 'Z'
    0x3C303030, 0x30303C00, // '['
    0xC0603018, 0x0C060200, // '\\'
    0x3C0C0C0C, 0x0C0C3C00, // ']'
    0x10386CC6, 0x00000000, // '^'
    0x00000000, 0x000000FE, // '_'
    0x18180C00, 0x00000000, // '`'
    0x00007C06, 0x7EC67E00, // 'a'
    0xC0C0FCC6, 0xC6C6FC00, // 'b'
    0x00007CC6, 0xC0C67C00, // 'c'
    0x06067EC6, 0xC6C67E00, // 'd'
    0x00007CC6, 0xFEC07C00, // 'e'
    0x1C30307C, 0x30303000, // 'f'
    0x00007EC6, 0xC67E067C, // 'g'
    0xC0C0FCC6, 0xC6C6C600, // 'h'
    0x18003818, 0x18183C00, // 'i'
    0x18003818, 0x18181870, // 'j'
    0xC0C0C6CC, 0xF8CCC600, // 'k'
    0x38181818, 0x18183C00, // 'l'
    0x0000ECFE, 0xD6C6C600, // 'm'
    0x0000FCC6, 0xC6C6C600, // 'n'
    0x00007CC6, 0xC6C67C00, // 'o'
    0x0000FCC6, 0xC6FCC0C0, // 'p'
    0x00007EC6, 0xC67E0606, // 'q'
    0x0000DCE6, 0xC0C0C000, // 'r'
    0x00007EC0, 0x7C06FC00, // 's'
    0x30307C30, 0x30301C00, // 't'
    0x0000C6C6, 0xC6C67E00, // 'u'
    0x0000C6C6, 0xC66C3800, // 'v'
    0x0000C6C6, 0xD6FE6C00, // 'w'
    0x0000C66C, 0x386CC600, // 'x'
    0x0000C6C6, 0xC67E067C, // 'y'
    0x0000FE0C, 0x3860FE00, // 'z'
    0x0E181870, 0x18180E00, // '{'
    0x18181818, 0x18181800, // '|'
    0x7018180E, 0x18187000, // '}'
    0x729C0000, 0x00000000, // '~'
];

/// 8x16 glyphs, 4 words per glyph.
pub static FONT_8X16: Font = Font::new(8, 16, 4, &FONT_8X16_DATA);

static FONT_8X16_DATA: [u32; 380] = [
    0x00000000, 0x00000000, 0x00000000, 0x00000000, // ' '
    0x0000183C, 0x3C3C1818, 0x18001818, 0x00000000, // '!'
    0x00666666, 0x24000000, 0x00000000, 0x00000000, // '"'
    0x0000006C, 0x6CFE6C6C, 0x6CFE6C6C, 0x00000000, // '#'
    0x18187CC6, 0xC2C07C06, 0x0686C67C, 0x18180000, // '$'
    0x00000000, 0xC2C60C18, 0x3060C686, 0x00000000, // '%'
    0x0000386C, 0x6C3876DC, 0xCCCCCC76, 0x00000000, // '&'
    0x00303030, 0x60000000, 0x00000000, 0x00000000, // '\''
    0x00000C18, 0x30303030, 0x3030180C, 0x00000000, // '('
    0x00003018, 0x0C0C0C0C, 0x0C0C1830, 0x00000000, // ')'
    0x00000000, 0x00663CFF, 0x3C660000, 0x00000000, // '*'
    0x00000000, 0x0018187E, 0x18180000, 0x00000000, // '+'
    0x00000000, 0x00000000, 0x00181818, 0x30000000, // ','
    0x00000000, 0x000000FE, 0x00000000, 0x00000000, // '-'
    0x00000000, 0x00000000, 0x00001818, 0x00000000, // '.'
    0x00000000, 0x02060C18, 0x3060C080, 0x00000000, // '/'
    0x0000386C, 0xC6C6D6D6, 0xC6C66C38, 0x00000000, // '0'
    0x00001838, 0x78181818, 0x1818187E, 0x00000000, // '1'
    0x00007CC6, 0x060C1830, 0x60C0C6FE, 0x00000000, // '2'
    0x00007CC6, 0x06063C06, 0x0606C67C, 0x00000000, // '3'
    0x00000C1C, 0x3C6CCCFE, 0x0C0C0C1E, 0x00000000, // '4'
    0x0000FEC0, 0xC0C0FC06, 0x0606C67C, 0x00000000, // '5'
    0x00003860, 0xC0C0FCC6, 0xC6C6C67C, 0x00000000, // '6'
    0x0000FEC6, 0x06060C18, 0x30303030, 0x00000000, // '7'
    0x00007CC6, 0xC6C67CC6, 0xC6C6C67C, 0x00000000, // '8'
    0x00007CC6, 0xC6C67E06, 0x06060C78, 0x00000000, // '9'
    0x00000000, 0x18180000, 0x00181800, 0x00000000, // ':'
    0x00000000, 0x18180000, 0x00181830, 0x00000000, // ';'
    0x00000006, 0x0C183060, 0x30180C06, 0x00000000, // '<'
    0x00000000, 0x007E0000, 0x7E000000, 0x00000000, // '='
    0x00000060, 0x30180C06, 0x0C183060, 0x00000000, // '>'
    0x00007CC6, 0xC60C1818, 0x18001818, 0x00000000, // '?'
    0x0000007C, 0xC6C6DEDE, 0xDEDCC07C, 0x00000000, // '@'
    0x00001038, 0x6CC6C6FE, 0xC6C6C6C6, 0x00000000, // 'A'
    0x0000FC66, 0x66667C66, 0x666666FC, 0x00000000, // 'B'
    0x00003C66, 0xC2C0C0C0, 0xC0C2663C, 0x00000000, // 'C'
    0x0000F86C, 0x66666666, 0x66666CF8, 0x00000000, // 'D'
    0x0000FE66, 0x62687868, 0x606266FE, 0x00000000, // 'E'
    0x0000FE66, 0x62687868, 0x606060F0, 0x00000000, // 'F'
    0x00003C66, 0xC2C0C0DE, 0xC6C6663A, 0x00000000, // 'G'
    0x0000C6C6, 0xC6C6FEC6, 0xC6C6C6C6, 0x00000000, // 'H'
    0x00003C18, 0x18181818, 0x1818183C, 0x00000000, // 'I'
    0x00001E0C, 0x0C0C0C0C, 0xCCCCCC78, 0x00000000, // 'J'
    0x0000E666, 0x666C7878, 0x6C6666E6, 0x00000000, // 'K'
    0x0000F060, 0x60606060, 0x606266FE, 0x00000000, // 'L'
    0x0000C6EE, 0xFEFED6C6, 0xC6C6C6C6, 0x00000000, // 'M'
    0x0000C6E6, 0xF6FEDECE, 0xC6C6C6C6, 0x00000000, // 'N'
    0x00007CC6, 0xC6C6C6C6, 0xC6C6C67C, 0x00000000, // 'O'
    0x0000FC66, 0x66667C60, 0x606060F0, 0x00000000, // 'P'
    0x00007CC6, 0xC6C6C6C6, 0xC6D6DE7C, 0x0C0E0000, // 'Q'
    0x0000FC66, 0x66667C6C, 0x666666E6, 0x00000000, // 'R'
    0x00007CC6, 0xC660380C, 0x06C6C67C, 0x00000000, // 'S'
    0x00007E7E, 0x5A181818, 0x1818183C, 0x00000000, // 'T'
    0x0000C6C6, 0xC6C6C6C6, 0xC6C6C67C, 0x00000000, // 'U'
    0x0000C6C6, 0xC6C6C6C6, 0xC66C3810, 0x00000000, // 'V'
    0x0000C6C6, 0xC6C6D6D6, 0xD6FEEE6C, 0x00000000, // 'W'
    0x0000C6C6, 0x6C7C3838, 0x7C6CC6C6, 0x00000000, // 'X'
    0x00006666, 0x66663C18, 0x1818183C, 0x00000000, // 'Y'
    0x0000FEC6, 0x860C1830, 0x60C2C6FE, 0x00000000, // 'Z'
    0x00003C30, 0x30303030, 0x3030303C, 0x00000000, // '['
    0x00000080, 0xC0603018, 0x0C060200, 0x00000000, // '\\'
    0x00003C0C, 0x0C0C0C0C, 0x0C0C0C3C, 0x00000000, // ']'
    0x10386CC6, 0x00000000, 0x00000000, 0x00000000, // '^'
    0x00000000, 0x00000000, 0x00000000, 0x00FF0000, // '_'
    0x0030180C, 0x00000000, 0x00000000, 0x00000000, // '`'
    0x00000000, 0x00780C7C, 0xCCCCCC76, 0x00000000, // 'a'
    0x0000E060, 0x60786C66, 0x6666667C, 0x00000000, // 'b'
    0x00000000, 0x007CC6C0, 0xC0C0C67C, 0x00000000, // 'c'
    0x00001C0C, 0x0C3C6CCC, 0xCCCCCC76, 0x00000000, // 'd'
    0x00000000, 0x007CC6FE, 0xC0C0C67C, 0x00000000, // 'e'
    0x00001C36, 0x32307830, 0x30303078, 0x00000000, // 'f'
    0x00000000, 0x0076CCCC, 0xCCCCCC7C, 0x0CCC7800, // 'g'
    0x0000E060, 0x606C7666, 0x666666E6, 0x00000000, // 'h'
    0x00001818, 0x00381818, 0x1818183C, 0x00000000, // 'i'
    0x00000606, 0x000E0606, 0x06060606, 0x66663C00, // 'j'
    0x0000E060, 0x60666C78, 0x786C66E6, 0x00000000, // 'k'
    0x00003818, 0x18181818, 0x1818183C, 0x00000000, // 'l'
    0x00000000, 0x00ECFED6, 0xD6D6D6C6, 0x00000000, // 'm'
    0x00000000, 0x00DC6666, 0x66666666, 0x00000000, // 'n'
    0x00000000, 0x007CC6C6, 0xC6C6C67C, 0x00000000, // 'o'
    0x00000000, 0x00DC6666, 0x6666667C, 0x6060F000, // 'p'
    0x00000000, 0x0076CCCC, 0xCCCCCC7C, 0x0C0C1E00, // 'q'
    0x00000000, 0x00DC7666, 0x606060F0, 0x00000000, // 'r'
    0x00000000, 0x007CC660, 0x380CC67C, 0x00000000, // 's'
    0x00001030, 0x30FC3030, 0x3030361C, 0x00000000, // 't'
    0x00000000, 0x00CCCCCC, 0xCCCCCC76, 0x00000000, // 'u'
    0x00000000, 0x00666666, 0x66663C18, 0x00000000, // 'v'
    0x00000000, 0x00C6C6D6, 0xD6D6FE6C, 0x00000000, // 'w'
    0x00000000, 0x00C66C38, 0x38386CC6, 0x00000000, // 'x'
    0x00000000, 0x00C6C6C6, 0xC6C6C67E, 0x060CF800, // 'y'
    0x00000000, 0x00FECC18, 0x3060C6FE, 0x00000000, // 'z'
    0x00000E18, 0x18187018, 0x1818180E, 0x00000000, // '{'
    0x00001818, 0x18180018, 0x18181818, 0x00000000, // '|'
    0x00007018, 0x18180E18, 0x18181870, 0x00000000, // '}'
    0x000076DC, 0x00000000, 0x00000000, 0x00000000, // '~'
];
