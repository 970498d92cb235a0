use propkit_macros::Props;

#[derive(Props)]
struct BadProps {
    #[default_value()]
    title: String,
}

fn main() {}
