use propkit_macros::Props;

#[derive(Props)]
struct BadProps {
    #[name = 3]
    title: String,
}

fn main() {}
