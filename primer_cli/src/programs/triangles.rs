//! Right triangle driver.

use std::io::{BufRead, Write};

use primer_core::errors::PrimerResult;
use primer_core::programs::triangle::{self, ScaleInput, TriangleInput, TriangleReport, TriangleSnapshot};

use crate::prompt::Prompter;

fn read_triangle<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>) -> PrimerResult<TriangleInput> {
    Ok(TriangleInput {
        bottom_left_x: prompter.prompt("Enter bottom left x coordinate: ", "bottom_left_x")?,
        bottom_left_y: prompter.prompt("Enter bottom left y coordinate: ", "bottom_left_y")?,
        length: prompter.prompt("Enter length: ", "length")?,
        height: prompter.prompt("Enter height: ", "height")?,
    })
}

fn read_scale<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>) -> PrimerResult<ScaleInput> {
    Ok(ScaleInput {
        sx: prompter.prompt("Enter scale factor in x direction: ", "sx")?,
        sy: prompter.prompt("Enter scale factor in y direction: ", "sy")?,
    })
}

pub fn run<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>, strict: bool) -> PrimerResult<TriangleReport> {
    let input = read_triangle(prompter)?;
    if strict {
        input.validate()?;
    }
    let before = TriangleSnapshot::from(&input.to_triangle());
    prompter.write(&triangle::render_block(&before))?;

    let scale = read_scale(prompter)?;
    if strict {
        scale.validate()?;
    }
    let report = triangle::calculate(&input, &scale);
    prompter.write(&triangle::render_block(&report.after))?;
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_run_scales_triangle() {
        let mut p = prompter("1\n2\n3\n4\n2\n0.5\n");
        let report = run(&mut p, false).unwrap();
        assert_eq!(report.before.hypotenuse, 5.0);
        assert_eq!(report.after.length, 6.0);
        assert_eq!(report.after.height, 2.0);

        let out = String::from_utf8(p.into_output()).unwrap();
        assert!(out.contains("Lower Left Vertex (1, 2)\n"));
        assert!(out.contains("Top Left Vertex (1, 6)\n"));
        assert!(out.contains("Bottom Right Vertex (7, 2)\n"));
        assert!(out.contains("Dimensions (6, 2)\n"));
        assert!(out.contains("Hypotenuse = 6.32456\n"));
        assert_eq!(out.matches("----------------------------------------").count(), 4);
    }

    #[test]
    fn test_y_coordinate_is_read_into_y() {
        let mut p = prompter("5 -3 1 1 1 1\n");
        let report = run(&mut p, false).unwrap();
        assert_eq!(report.before.bottom_left.y(), -3.0);
    }

    #[test]
    fn test_strict_rejects_negative_scale() {
        let mut p = prompter("0 0 3 4 -2 1\n");
        let err = run(&mut p, true).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
        // The first block was already shown
        let out = String::from_utf8(p.into_output()).unwrap();
        assert!(out.contains("Hypotenuse = 5\n"));
    }
}
