// crates/heatpaint-core/src/glyph/font.rs

use super::Glyph;

/// 7-row pixel font. Letters are 5 columns wide; a few punctuation marks are narrower.
pub static FONT: &[Glyph] = &[
    Glyph { ch: ' ', rows: [".....", ".....", ".....", ".....", ".....", ".....", "....."] },
    Glyph { ch: '\'', rows: ["..#..", "..#..", ".....", ".....", ".....", ".....", "....."] },
    Glyph { ch: '@', rows: [".###.", "#...#", "#.###", "#.#.#", "#.###", "#....", ".###."] },
    Glyph { ch: '.', rows: [".", ".", ".", ".", ".", ".", "#"] },
    Glyph { ch: '!', rows: ["#", "#", "#", "#", "#", ".", "#"] },
    Glyph { ch: '-', rows: ["...", "...", "...", "###", "...", "...", "..."] },
    Glyph { ch: 'A', rows: [".###.", "#...#", "#...#", "#####", "#...#", "#...#", "#...#"] },
    Glyph { ch: 'B', rows: ["####.", "#...#", "#...#", "####.", "#...#", "#...#", "####."] },
    Glyph { ch: 'C', rows: [".###.", "#...#", "#....", "#....", "#....", "#...#", ".###."] },
    Glyph { ch: 'D', rows: ["####.", "#...#", "#...#", "#...#", "#...#", "#...#", "####."] },
    Glyph { ch: 'E', rows: ["#####", "#....", "####.", "#....", "#....", "#....", "#####"] },
    Glyph { ch: 'F', rows: ["#####", "#....", "####.", "#....", "#....", "#....", "#...."] },
    Glyph { ch: 'G', rows: [".###.", "#...#", "#....", "#.###", "#...#", "#...#", ".####"] },
    Glyph { ch: 'H', rows: ["#...#", "#...#", "#...#", "#####", "#...#", "#...#", "#...#"] },
    Glyph { ch: 'I', rows: ["#####", "..#..", "..#..", "..#..", "..#..", "..#..", "#####"] },
    Glyph { ch: 'J', rows: ["..###", "...#.", "...#.", "...#.", "...#.", "#..#.", ".##.."] },
    Glyph { ch: 'K', rows: ["#...#", "#..#.", "#.#..", "##...", "#.#..", "#..#.", "#...#"] },
    Glyph { ch: 'L', rows: ["#....", "#....", "#....", "#....", "#....", "#....", "#####"] },
    Glyph { ch: 'M', rows: ["#...#", "##.##", "#.#.#", "#...#", "#...#", "#...#", "#...#"] },
    Glyph { ch: 'N', rows: ["#...#", "##..#", "#.#.#", "#..##", "#...#", "#...#", "#...#"] },
    Glyph { ch: 'O', rows: [".###.", "#...#", "#...#", "#...#", "#...#", "#...#", ".###."] },
    Glyph { ch: 'P', rows: ["####.", "#...#", "#...#", "####.", "#....", "#....", "#...."] },
    Glyph { ch: 'Q', rows: [".###.", "#...#", "#...#", "#...#", "#.#.#", "#..#.", ".##.#"] },
    Glyph { ch: 'R', rows: ["####.", "#...#", "#...#", "####.", "#.#..", "#..#.", "#...#"] },
    Glyph { ch: 'S', rows: [".####", "#....", "#....", ".###.", "....#", "....#", "####."] },
    Glyph { ch: 'T', rows: ["#####", "..#..", "..#..", "..#..", "..#..", "..#..", "..#.."] },
    Glyph { ch: 'U', rows: ["#...#", "#...#", "#...#", "#...#", "#...#", "#...#", ".###."] },
    Glyph { ch: 'V', rows: ["#...#", "#...#", "#...#", "#...#", "#...#", ".#.#.", "..#.."] },
    Glyph { ch: 'W', rows: ["#...#", "#...#", "#...#", "#.#.#", "#.#.#", "##.##", "#...#"] },
    Glyph { ch: 'X', rows: ["#...#", "#...#", ".#.#.", "..#..", ".#.#.", "#...#", "#...#"] },
    Glyph { ch: 'Y', rows: ["#...#", "#...#", ".#.#.", "..#..", "..#..", "..#..", "..#.."] },
    Glyph { ch: 'Z', rows: ["#####", "....#", "...#.", "..#..", ".#...", "#....", "#####"] },
];
