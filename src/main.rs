use budgetboard::constants::WINDOW_SIZE;
use budgetboard::BudgetBoard;
use gpui::*;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    Application::new().run(|cx: &mut App| {
        gpui_component::init(cx);

        let bounds = Bounds::centered(None, size(px(WINDOW_SIZE.0), px(WINDOW_SIZE.1)), cx);
        let window = cx.open_window(
            WindowOptions {
                window_bounds: Some(WindowBounds::Windowed(bounds)),
                titlebar: Some(TitlebarOptions {
                    title: Some("BudgetAI".into()),
                    ..Default::default()
                }),
                ..Default::default()
            },
            |_, cx| cx.new(BudgetBoard::new),
        );
        match window {
            Ok(_) => cx.activate(true),
            Err(e) => {
                tracing::error!(error = %e, "failed to open window");
                cx.quit();
            }
        }
    });
}
