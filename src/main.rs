use asmview::{App, Result, ViewerSettings};

fn main() -> Result<()> {
    App::new(ViewerSettings::default()).run()
}
