use propkit_macros::Props;

#[derive(Props)]
struct BadProps {
    #[name = "posterSrc"]
    #[name = "poster"]
    poster_src: String,
}

fn main() {}
