//! Input lines with known answers.

/// One input line and its expected rendering.
#[derive(Debug, Clone, Copy)]
pub struct Scenario {
    pub name: &'static str,
    pub line: &'static str,
    pub expected: &'static str,
}

/// Well-formed lines with their expected output.
pub const SOLVED: &[Scenario] = &[
    Scenario {
        name: "single heavy winner",
        line: "81 : (1,53.38,€45) (2,88.62,€98) (3,78.48,€3) (4,72.30,€76) (5,30.18,€9) (6,46.34,€48)",
        expected: "4",
    },
    Scenario {
        name: "nothing fits",
        line: "8 : (1,15.3,€34)",
        expected: "-",
    },
    Scenario {
        name: "pair beats triple",
        line: "75 : (1,85.31,€29) (2,14.55,€74) (3,3.98,€16) (4,26.24,€55) (5,63.69,€52) (6,76.25,€75) (7,60.02,€74) (8,93.18,€35) (9,89.95,€78)",
        expected: "2,7",
    },
    Scenario {
        name: "equal cost, lighter wins",
        line: "56 : (1,90.72,€13) (2,33.80,€40) (3,43.15,€10) (4,37.97,€16) (5,46.81,€36) (6,48.77,€79) (7,81.80,€45) (8,19.36,€79) (9,6.76,€64)",
        expected: "8,9",
    },
];

/// The [`SOLVED`] lines as one input file.
pub const SAMPLE_INPUT: &str = "81 : (1,53.38,€45) (2,88.62,€98) (3,78.48,€3) (4,72.30,€76) (5,30.18,€9) (6,46.34,€48)
8 : (1,15.3,€34)
75 : (1,85.31,€29) (2,14.55,€74) (3,3.98,€16) (4,26.24,€55) (5,63.69,€52) (6,76.25,€75) (7,60.02,€74) (8,93.18,€35) (9,89.95,€78)
56 : (1,90.72,€13) (2,33.80,€40) (3,43.15,€10) (4,37.97,€16) (5,46.81,€36) (6,48.77,€79) (7,81.80,€45) (8,19.36,€79) (9,6.76,€64)
";

/// Expected output for [`SAMPLE_INPUT`].
pub const SAMPLE_OUTPUT: &str = "4\n-\n2,7\n8,9";

/// Builds a well-formed line with `count` unit items `(i,1,€1)`.
pub fn line_with_items(capacity: &str, count: usize) -> String {
    let mut line = format!("{} :", capacity);
    for index in 1..=count {
        line.push_str(&format!(" ({},1,€1)", index));
    }
    line
}
