use std::{env,
          io::{BufWriter, Write},
          fs::File,
          error::Error};
use palette_blend::{BlendGrid, BlendSpec, Codec, Method, Palette, Selection,
                    find_closest_match};

type Err = Box<dyn Error>;

fn cell(fh: &mut impl Write, css: Option<&str>, width: u32) -> Result<(), Err> {
    match css {
        Some(c) => writeln!(fh, "  <td title=\"{c}\" style=\"width: {width}px; \
                                 height: {width}px; background-color: {c}\"></td>")?,
        None => writeln!(fh, "  <td style=\"width: {width}px\"></td>")?,
    }
    Ok(())
}

fn table_of_grid(fh: &mut impl Write, grid: &BlendGrid, width: u32,
                 comment: &str) -> Result<(), Err> {
    writeln!(fh, "<table style=\"border: 0px;  border-spacing: 0px\">")?;
    for (iy, row) in grid.display_rows().into_iter().enumerate() {
        writeln!(fh, "<tr>")?;
        for c in row {
            cell(fh, c, width)?;
        }
        if iy == 0 {
            writeln!(fh, "<td rowspan=\"{}\" style=\"padding-left: 7px\">\
                          {comment}</td>", grid.side())?;
        }
        writeln!(fh, "</tr>")?;
    }
    writeln!(fh, "</table><br/>")?;
    Ok(())
}

fn grid(fh: &mut impl Write, codec: &Codec, corners: [&str; 4], method: Method,
        n: usize) -> Result<(), Err> {
    let mut c = Vec::with_capacity(4);
    for s in corners {
        c.push(codec.parse_color(s)?);
    }
    let spec = BlendSpec::new([c[0], c[1], c[2], c[3]], method, n)?;
    table_of_grid(fh, &spec.generate(), 24, &format!("{method}, {n} × {n}"))
}

const PALETTE: &str = "\
#5e0063
hsl(40deg 100% 83%)
tomato // warm
-
rgb(0, 128, 128)
navy
";

fn main() -> Result<(), Err> {
    let codec = Codec::default();
    let mut fh = BufWriter::new(File::create("blend_grid.html")?);
    writeln!(fh, "<html>\n\
                  <head>\n\
                  <title>palette-blend: test {}</title>\n\
                  </head>\n\
                  <body>",
             env::args().next().unwrap_or_default())?;

    writeln!(fh, "<h3>Methods</h3>")?;
    for m in Method::ALL {
        grid(&mut fh, &codec, ["#5e0063", "#ffebaa", "red", "blue"], m, 6)?;
    }

    writeln!(fh, "<h3>Linked</h3>")?;
    let spec = BlendSpec::linked(codec.parse_color("white")?, codec.parse_color("teal")?,
                                 codec.parse_color("black")?, Method::Lab, 8)?;
    let linked = spec.generate();
    table_of_grid(&mut fh, &linked, 24, "lab, linked")?;
    writeln!(fh, "<pre>{}</pre>", linked.selection_text(Selection::CornerTopLeft))?;

    writeln!(fh, "<h3>Palette</h3>")?;
    let text = format!("{PALETTE}-\n{}",
                       linked.selection_text(Selection::DiagonalTopRight));
    let palette = Palette::parse(&codec, &text);
    for row in &palette.rows {
        writeln!(fh, "<table style=\"border-spacing: 2px\"><tr>")?;
        for s in row {
            writeln!(fh, "  <td title=\"{}\" style=\"width: 30px; height: 30px; \
                          background-color: {}; outline: 1px solid {}\"></td>",
                     s.comment.as_deref().unwrap_or(&s.css), s.css, s.contrast)?;
        }
        writeln!(fh, "</tr></table>")?;
    }
    writeln!(fh, "<h3>Nearest</h3>")?;
    for target in ["#ff0000", "orange", "hsl(180deg 50% 30%)", "#888"] {
        if let Some(s) = find_closest_match(&codec, target, &palette) {
            writeln!(fh, "<p><span style=\"background-color: {target}\">\
                          &nbsp;&nbsp;&nbsp;</span> {target} → \
                          <span style=\"background-color: {0}\">\
                          &nbsp;&nbsp;&nbsp;</span> {0}</p>", s.css)?;
        }
    }

    writeln!(fh, "</body>\n\
                  </html>")?;
    Ok(())
}
