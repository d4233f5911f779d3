use equate::Context;

fn main() {
    let ctx = Context::new();
    let inputs = [
        "2x + 4 = 10",
        "$x^{2} - 4 = 0$",
        "x^2 - 2 = 0",
        "what plus 5 equals 10",
        "x = x + 1",
    ];

    for input in inputs {
        let reply = ctx.solve_text(input);
        let json = serde_json::to_string_pretty(&reply).expect("serialize reply");
        println!("{json}");
    }
}
