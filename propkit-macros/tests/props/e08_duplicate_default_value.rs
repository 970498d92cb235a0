use propkit_macros::Props;

#[derive(Props)]
struct BadProps {
    #[default_value = "Mad Max"]
    #[default_value = "Heat"]
    title: String,
}

fn main() {}
