use propkit_macros::Props;

#[derive(Props)]
enum BadProps {
    One,
}

fn main() {}
