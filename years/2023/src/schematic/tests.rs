use lib::prelude::{Input, Span};

use super::{is_symbol, numbers, scan, solve, touches_symbol, Number, Scanner, Totals, Window};

const SAMPLE: [&str; 10] = [
    "467..114..",
    "...*......",
    "..35..633.",
    "......#...",
    "617*......",
    ".....+.58.",
    "..592.....",
    "......755.",
    "...$.*....",
    ".664.598..",
];

#[test]
fn test_sample() {
    let totals = scan(SAMPLE);
    assert_eq!(totals.part_numbers, 4361);
    assert_eq!(totals.gear_ratios, 467835);

    let input = Input::from_lines(SAMPLE);
    assert_eq!(solve(&input).unwrap(), (4361, 467835));
}

#[test]
fn test_numbers() {
    assert_eq!(
        numbers("467..114.."),
        [
            Number {
                span: Span::new(0, 3),
                value: 467
            },
            Number {
                span: Span::new(5, 3),
                value: 114
            },
        ]
    );

    assert_eq!(numbers(".....+.58."), [Number {
        span: Span::new(7, 2),
        value: 58
    }]);

    assert!(numbers("..........").is_empty());
    assert!(numbers("").is_empty());
}

#[test]
fn test_numbers_saturate() {
    let line = "99999999999999999999999";
    assert_eq!(numbers(line)[0].value, u64::MAX);
}

#[test]
fn test_is_symbol() {
    let line = "0123456789.*#$+/@=%&-";

    for column in 0..=10 {
        assert!(!is_symbol(line, column), "{column}");
    }

    for column in 11..line.len() {
        assert!(is_symbol(line, column), "{column}");
    }

    assert!(!is_symbol(line, line.len()));
    assert!(!is_symbol("", 0));
    assert!(!is_symbol("*", usize::MAX));
}

#[test]
fn test_adjacency_range() {
    let span = Span::new(3, 2);

    for column in 0..9 {
        let mut line = vec![b'.'; 8];

        if let Some(c) = line.get_mut(column) {
            *c = b'#';
        }

        let line = String::from_utf8(line).unwrap();
        let expected = (2..=5).contains(&column);
        assert_eq!(touches_symbol(&line, span), expected, "{line}");
    }
}

#[test]
fn test_adjacency_at_line_edges() {
    assert!(touches_symbol("#...", Span::new(0, 2)));
    assert!(touches_symbol("..#", Span::new(0, 2)));
    assert!(!touches_symbol("...#", Span::new(0, 2)));
    assert!(touches_symbol("...#", Span::new(2, 2)));
    assert!(!touches_symbol("", Span::new(0, 3)));
}

#[test]
fn test_part_number_rules() {
    // Symbol only on the current line, to the left and to the right.
    assert_eq!(scan(["#12..34$"]).part_numbers, 46);

    // Symbol diagonally above and below.
    assert_eq!(scan(["#....", ".12..", "....&", ".....", ".7..."]).part_numbers, 12);
    assert_eq!(scan(["...12", "..*.."]).part_numbers, 12);

    // Not touched.
    assert_eq!(scan(["12...", "...#.", "....."]).part_numbers, 0);
}

#[test]
fn test_number_touched_by_many_symbols_counts_once() {
    assert_eq!(scan(["###", "#5#", "###"]).part_numbers, 5);
}

#[test]
fn test_dots_only() {
    let window = Window::new("..........", "..........", "..........");
    assert_eq!(window.score(), Totals::default());
    assert!(numbers("..........").is_empty());
}

#[test]
fn test_gear_with_three_neighbours() {
    let lines = ["..7..", "11*22", "....."];
    let totals = scan(lines);

    assert_eq!(totals.part_numbers, 40);
    assert_eq!(totals.gear_ratios, 0);

    let window = Window::new(lines[0], lines[1], lines[2]);
    assert_eq!(window.neighbours(2).len(), 3);
}

#[test]
fn test_gear_needs_two_neighbours() {
    assert_eq!(scan(["..", "3*"]).gear_ratios, 0);
    assert_eq!(scan(["*"]).gear_ratios, 0);
    assert_eq!(scan(["3*4"]).gear_ratios, 12);
    assert_eq!(scan(["2..", ".*.", "..5"]).gear_ratios, 10);
}

#[test]
fn test_most_neighbours() {
    let window = Window::new("1.2", "3*4", "5.6");
    let values = window
        .neighbours(1)
        .iter()
        .map(|n| n.value)
        .collect::<Vec<_>>();
    assert_eq!(values, [1, 2, 3, 4, 5, 6]);
    assert_eq!(window.score().gear_ratios, 0);
}

#[test]
fn test_gear_at_line_edges() {
    assert_eq!(scan(["12.", "*..", "3.."]).gear_ratios, 36);
    assert_eq!(scan([".12", "..*", "..3"]).gear_ratios, 36);
    assert_eq!(scan(["*12", "3.."]).gear_ratios, 36);
}

#[test]
fn test_gear_is_a_symbol() {
    assert_eq!(scan(["4*"]).part_numbers, 4);
}

#[test]
fn test_score_is_idempotent() {
    let window = Window::new(SAMPLE[3], SAMPLE[4], SAMPLE[5]);
    let a = window.score();
    let b = window.score();
    assert_eq!(a, b);
    assert_eq!(a.part_numbers, 617);
    assert_eq!(window.current, SAMPLE[4]);
}

#[test]
fn test_first_and_last_lines() {
    let first = Window::new("", SAMPLE[0], SAMPLE[1]);
    assert_eq!(first.score().part_numbers, 467);

    let last = Window::new(SAMPLE[8], SAMPLE[9], "");
    let totals = last.score();
    assert_eq!(totals.part_numbers, 664 + 598);
    assert_eq!(totals.gear_ratios, 0);

    let single = Window::new("", "1*2", "");
    assert_eq!(single.score(), Totals {
        part_numbers: 3,
        gear_ratios: 2
    });
}

#[test]
fn test_window_count() {
    let mut scanner = Scanner::new();

    for line in SAMPLE {
        scanner.push(line);
    }

    assert_eq!(scanner.windows(), SAMPLE.len() - 1);
    assert_eq!(scanner.finish().part_numbers, 4361);

    let scanner = Scanner::new();
    assert_eq!(scanner.windows(), 0);
    assert_eq!(scanner.finish(), Totals::default());
}

#[test]
fn test_empty_lines_are_windows() {
    assert_eq!(scan(["12", "", "#"]).part_numbers, 0);
    assert_eq!(scan(["12", "#", ""]).part_numbers, 12);
}
