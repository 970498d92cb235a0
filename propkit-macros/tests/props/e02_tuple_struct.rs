use propkit_macros::Props;

#[derive(Props)]
struct BadProps(String);

fn main() {}
