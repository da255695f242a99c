use editgrid_align::{
    classic_edit_distance, global_alignment, AlignmentEngine, CostModel, MatrixRenderer,
};
use pretty_assertions::assert_eq;

fn chars(s: &str) -> Vec<char> {
    s.chars().collect()
}

#[test]
fn test_render_bane_barn() {
    let mut engine = classic_edit_distance(chars("bane"), chars("barn"));
    engine.compute();

    let expected = concat!(
        "            b     a     r     n \n",
        "\n",
        "      0,    1,    2,    3,    4;\n",
        "b     1,\\   0, <  1, <  2, <  3;\n",
        "a     2,  | 1,\\   0, <  1, <  2;\n",
        "n     3,  | 2,  | 1,\\<| 2,\\   1;\n",
        "e     4,  | 3,  | 2,\\<| 3,  | 2;\n",
    );
    assert_eq!(engine.to_string(), expected);
}

#[test]
fn test_render_before_compute_shows_placeholders() {
    let engine = global_alignment(chars("AC"), chars("A"), 2);

    let expected = concat!(
        "            A \n",
        "\n",
        "      0,   -2;\n",
        "A    -2,   --;\n",
        "C    -4,   --;\n",
    );
    assert_eq!(MatrixRenderer::default().render(&engine), expected);
}

#[test]
fn test_render_transposition_marker() {
    let model = CostModel::new()
        .with_substitution(|a: char, b: char| if a == b { 0 } else { 1 })
        .with_transposition(|_, _| 1)
        .with_transpositions(true);
    let mut engine = AlignmentEngine::from_strs("ab", "ba", model);
    engine.compute();

    let rendered = engine.to_string();
    let last = rendered.lines().last().unwrap();
    assert_eq!(last, "b     2,\\   1,x   1;");
}
