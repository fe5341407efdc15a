//! Desktop editor window.
//!
//! The window owns no compile logic: the Compile button hands the editor
//! buffer to [`CompileInvoker::invoke`] and the output pane renders the
//! returned string verbatim.

use crate::config::InvokerConfig;
use crate::invoker::CompileInvoker;
use crate::theme;
use eframe::NativeOptions;

/// Open the editor window and run it until closed.
pub fn run_editor(config: InvokerConfig) -> anyhow::Result<()> {
    let invoker = CompileInvoker::new(config)?;

    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_title("PseudoCompiler"),
        ..Default::default()
    };

    eframe::run_native(
        "pseudopad",
        options,
        Box::new(move |cc| {
            theme::apply(&cc.egui_ctx);
            Box::new(EditorApp::new(invoker))
        }),
    )
    .map_err(|e| anyhow::anyhow!("Editor window failed: {e}"))
}

struct EditorApp {
    invoker: CompileInvoker,
    source: String,
    display: String,
}

impl EditorApp {
    fn new(invoker: CompileInvoker) -> Self {
        EditorApp {
            invoker,
            source: String::new(),
            display: String::new(),
        }
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::right("output_pane")
            .resizable(true)
            .default_width(560.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .id_source("output_scroll")
                    .show(ui, |ui| {
                        let mut shown = self.display.as_str();
                        ui.add_sized(
                            ui.available_size(),
                            egui::TextEdit::multiline(&mut shown)
                                .font(egui::TextStyle::Monospace)
                                .interactive(false),
                        );
                    });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            let button_height = 28.0;
            let editor_height = (ui.available_height() - button_height - 8.0).max(0.0);

            egui::ScrollArea::vertical()
                .id_source("editor_scroll")
                .max_height(editor_height)
                .show(ui, |ui| {
                    ui.add_sized(
                        [ui.available_width(), editor_height],
                        egui::TextEdit::multiline(&mut self.source)
                            .font(egui::TextStyle::Monospace)
                            .code_editor(),
                    );
                });

            ui.add_space(4.0);
            // Blocks the UI thread until the compiler exits; the invocation
            // model is deliberately synchronous.
            if ui
                .add_sized([ui.available_width(), button_height], egui::Button::new("Compile"))
                .clicked()
            {
                self.display = self.invoker.invoke(&self.source);
            }
        });
    }
}
