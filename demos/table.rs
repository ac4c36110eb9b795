use pdf_rows::pagesize::Orientation;
use pdf_rows::{
    colours, Align, BuiltinFont, Canvas, CanvasConfig, Colour, DrawSurface, Font, Info, Table,
};

fn main() {
    let config = CanvasConfig::default().orientation(Orientation::Portrait);
    let mut canvas = Canvas::open("table.pdf", config).expect("can create table.pdf");
    canvas.set_info(
        Info::new()
            .title("Table Rows")
            .subject("Rows of wrapped text that grow with their content"),
    );

    // body text in the font given on the command line, or helvetica
    let body_font = match std::env::args().nth(1) {
        Some(path) => {
            let bytes = std::fs::read(&path).expect("can read font file");
            Font::load(bytes).expect("can parse font")
        }
        None => Font::builtin(BuiltinFont::Helvetica),
    };
    let body_font = canvas.add_font(body_font);
    let courier = canvas.add_font(Font::builtin(BuiltinFont::Courier));
    canvas.new_page();

    let mut table = Table::new();
    table
        .set_widths(vec![15.0, 45.0, 0.0, 25.0])
        .set_aligns(vec![Align::Right, Align::Left, Align::Left, Align::Center]);

    canvas.set_font(courier, 11.0).expect("courier was added");
    canvas.set_draw_colour(colours::BLUE);
    table
        .row(&mut canvas, &["#", "Title", "Body", "Words"])
        .expect("can draw header");

    canvas.set_font(body_font, 9.0).expect("body font was added");
    canvas.set_draw_colour(Colour::grey(96));
    for i in 1..=60 {
        let title = lipsum::lipsum_words(1 + i % 4);
        let body = lipsum::lipsum(3 + (i * 7) % 40);
        let words = body.split_whitespace().count().to_string();

        if i % 10 == 0 {
            canvas.set_text_colour(colours::RED);
        }
        table
            .row(&mut canvas, &[i.to_string(), title, body, words])
            .expect("can draw row");
        canvas.set_text_colour(colours::BLACK);
    }

    canvas.ln(5.0);
    canvas
        .multi_cell(0.0, 5.0, &lipsum::lipsum(60), true, Align::Left)
        .expect("can draw closing paragraph");

    canvas.close().expect("can write table.pdf");
}
