//! Plain-text layouts for problems.
//!
//! Vertical layouts right-align every row to the widest number, with a
//! two-column operator gutter and a rule underneath. Horizontal layouts
//! are a single expression line.

use crate::{
    problem::{AddSubProblem, DivProblem, MulProblem, Problem},
    types::Layout,
};

const RULE: &str = "—";

/// Group digits in threes: 1234567 -> "1,234,567".
pub fn format_number(n: impl Into<i128>) -> String {
    let n: i128 = n.into();
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Render one problem. Flash problems print as horizontal expressions.
pub fn format_problem(problem: &Problem, layout: Layout, show_answer: bool) -> String {
    match (problem, layout) {
        (Problem::AddSub(p), Layout::Vertical) => vertical_add_sub(p, show_answer),
        (Problem::AddSub(p), _)                => horizontal_add_sub(p, show_answer),
        (Problem::Mul(p), Layout::Vertical)    => vertical_mul(p, show_answer),
        (Problem::Mul(p), _)                   => horizontal_mul(p, show_answer),
        (Problem::Div(p), Layout::Vertical)    => vertical_div(p, show_answer),
        (Problem::Div(p), _)                   => horizontal_div(p, show_answer),
    }
}

fn pad_left(s: &str, width: usize) -> String {
    format!("{s:>width$}")
}

fn width_of(cells: &[&str], answer: Option<&str>) -> usize {
    cells
        .iter()
        .copied()
        .chain(answer)
        .map(|c| c.chars().count())
        .max()
        .unwrap_or(0)
}

/// Two-operand vertical block shared by multiplication and division.
fn vertical_pair(top: &str, symbol: char, bottom: &str, answer: Option<&str>) -> String {
    let width = width_of(&[top, bottom], answer);
    let mut lines = vec![
        format!("  {}", pad_left(top, width)),
        format!("{symbol} {}", pad_left(bottom, width)),
        RULE.repeat(width + 2),
    ];
    if let Some(answer) = answer {
        lines.push(format!("  {}", pad_left(answer, width)));
    }
    lines.join("\n")
}

pub fn vertical_add_sub(p: &AddSubProblem, show_answer: bool) -> String {
    let nums: Vec<String> = p.nums().iter().map(|n| format_number(*n)).collect();
    let answer = format_number(p.answer());
    let cells: Vec<&str> = nums.iter().map(String::as_str).collect();
    let width = width_of(&cells, show_answer.then_some(answer.as_str()));

    let mut lines = Vec::with_capacity(nums.len() + 2);
    lines.push(format!("  {}", pad_left(&nums[0], width)));
    for (op, n) in p.ops().iter().zip(&nums[1..]) {
        lines.push(format!("{} {}", op.symbol(), pad_left(n, width)));
    }
    lines.push(RULE.repeat(width + 2));
    if show_answer {
        lines.push(format!("  {}", pad_left(&answer, width)));
    }
    lines.join("\n")
}

pub fn horizontal_add_sub(p: &AddSubProblem, show_answer: bool) -> String {
    let mut expr = format_number(p.nums()[0]);
    for (op, n) in p.ops().iter().zip(&p.nums()[1..]) {
        expr.push_str(&format!(" {} {}", op.symbol(), format_number(*n)));
    }
    if show_answer {
        expr.push_str(&format!(" = {}", format_number(p.answer())));
    }
    expr
}

pub fn vertical_mul(p: &MulProblem, show_answer: bool) -> String {
    let answer = format_number(p.answer);
    vertical_pair(
        &format_number(p.a),
        '×',
        &format_number(p.b),
        show_answer.then_some(answer.as_str()),
    )
}

pub fn horizontal_mul(p: &MulProblem, show_answer: bool) -> String {
    let mut s = format!("{} × {}", format_number(p.a), format_number(p.b));
    if show_answer {
        s.push_str(&format!(" = {}", format_number(p.answer)));
    }
    s
}

/// "q" for exact division, "q R r" otherwise.
pub fn division_answer(p: &DivProblem) -> String {
    if p.remainder == 0 {
        format_number(p.quotient)
    } else {
        format!("{} R {}", format_number(p.quotient), format_number(p.remainder))
    }
}

pub fn vertical_div(p: &DivProblem, show_answer: bool) -> String {
    let answer = division_answer(p);
    vertical_pair(
        &format_number(p.dividend),
        '÷',
        &format_number(p.divisor),
        show_answer.then_some(answer.as_str()),
    )
}

pub fn horizontal_div(p: &DivProblem, show_answer: bool) -> String {
    let mut s = format!("{} ÷ {}", format_number(p.dividend), format_number(p.divisor));
    if show_answer {
        s.push_str(&format!(" = {}", division_answer(p)));
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Op;

    #[test]
    fn numbers_are_grouped_in_threes() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1_000), "1,000");
        assert_eq!(format_number(1_234_567), "1,234,567");
        assert_eq!(format_number(-45_000), "-45,000");
        assert_eq!(format_number(10_i128.pow(23)), "100,000,000,000,000,000,000,000");
    }

    #[test]
    fn vertical_add_sub_aligns_right() {
        let p = AddSubProblem::new(vec![1_200, 34, 5], vec![Op::Add, Op::Sub]);
        let text = vertical_add_sub(&p, true);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, vec![
            "  1,200",
            "+    34",
            "-     5",
            "———————",
            "  1,229",
        ]);
    }

    #[test]
    fn vertical_hides_answer_row() {
        let p = AddSubProblem::new(vec![12, 3], vec![Op::Add]);
        assert_eq!(vertical_add_sub(&p, false), "  12\n+  3\n————");
    }

    #[test]
    fn horizontal_add_sub_reads_left_to_right() {
        let p = AddSubProblem::new(vec![76, 46, 58], vec![Op::Add, Op::Sub]);
        assert_eq!(horizontal_add_sub(&p, false), "76 + 46 - 58");
        assert_eq!(horizontal_add_sub(&p, true), "76 + 46 - 58 = 64");
    }

    #[test]
    fn vertical_mul_widens_for_answer() {
        let p = MulProblem::new(789, 5);
        assert_eq!(vertical_mul(&p, true), "    789\n×     5\n———————\n  3,945");
    }

    #[test]
    fn division_shows_remainder_only_when_nonzero() {
        let exact = DivProblem::new(7, 51, 0);
        assert_eq!(horizontal_div(&exact, true), "357 ÷ 7 = 51");

        let inexact = DivProblem::new(7, 51, 3);
        assert_eq!(horizontal_div(&inexact, true), "360 ÷ 7 = 51 R 3");
        assert_eq!(vertical_div(&inexact, true), "     360\n÷      7\n————————\n  51 R 3");
    }

    #[test]
    fn flash_layout_falls_back_to_expression() {
        let p = Problem::Mul(MulProblem::new(12, 3));
        assert_eq!(format_problem(&p, Layout::Flash, true), "12 × 3 = 36");
    }
}
