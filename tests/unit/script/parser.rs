use super::*;

fn kinds(p: &Program) -> Vec<InstructionKind> {
    p.iter().map(|i| i.kind).collect()
}

#[test]
fn keyword_table_covers_every_kind() {
    let src = "canvas 10 10\n\
               circle c 1 1 1 red\n\
               rectangle r 0 0 1 1 blue\n\
               rect r2 0 0 1 1 blue\n\
               triangle t 0 0 1 0 0 1 green\n\
               group g\n\
               end\n\
               render\n";
    let p = parse_script(src).unwrap();
    assert_eq!(
        kinds(&p),
        vec![
            InstructionKind::Canvas,
            InstructionKind::Circle,
            InstructionKind::Rectangle,
            InstructionKind::Rectangle,
            InstructionKind::Triangle,
            InstructionKind::GroupStart,
            InstructionKind::GroupEnd,
            InstructionKind::Render,
        ]
    );
    assert_eq!(p.len(), 8);
}

#[test]
fn params_are_verbatim_and_include_keyword() {
    let p = parse_script("rect box -3 0x10 4 4 10,20,30\n").unwrap();
    let ins = &p.instructions()[0];
    assert_eq!(ins.keyword(), "rect");
    assert_eq!(ins.params, vec!["rect", "box", "-3", "0x10", "4", "4", "10,20,30"]);
    assert_eq!(ins.line, 1);
}

#[test]
fn unknown_keywords_and_comments_are_skipped() {
    let src = "# comment\nellipse e 1 1 1 1 red\n// another\nrender\nRENDER\n";
    let p = parse_script(src).unwrap();
    assert_eq!(kinds(&p), vec![InstructionKind::Render]);
    assert_eq!(p.instructions()[0].line, 4);
}

#[test]
fn under_parameterized_lines_are_still_parsed() {
    // Arity is checked at execution time, not parse time.
    let p = parse_script("circle c1 5 5 3\n").unwrap();
    assert_eq!(p.len(), 1);
    assert_eq!(p.instructions()[0].params.len(), 5);
    assert!(p.instructions()[0].params.len() < InstructionKind::Circle.min_params());
}

#[test]
fn last_line_without_newline_is_parsed() {
    let p = parse_script("group g\nend").unwrap();
    assert_eq!(
        kinds(&p),
        vec![InstructionKind::GroupStart, InstructionKind::GroupEnd]
    );
}

#[test]
fn empty_script_is_an_empty_program() {
    let p = parse_script("").unwrap();
    assert!(p.is_empty());
}
