use propkit_macros::Props;

#[derive(Props)]
struct BadProps {
    #[name("title")]
    title: String,
}

fn main() {}
