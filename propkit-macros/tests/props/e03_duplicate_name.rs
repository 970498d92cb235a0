use propkit_macros::Props;

#[derive(Props)]
struct BadProps {
    title: String,

    #[name = "title"]
    heading: String,
}

fn main() {}
