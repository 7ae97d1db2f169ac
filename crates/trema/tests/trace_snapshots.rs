//! Snapshot tests for the call trace of whole frames.

use trema::Renderer;
use trema::testing::{RecordingBackend, RecordingTrace};

fn render_traced(txml: &str, tss: &str, script: impl FnOnce(&RecordingBackend)) -> RecordingTrace {
    let backend = RecordingBackend::new();
    let trace = RecordingTrace::new();
    let mut renderer = Renderer::new();
    renderer.set_backend(backend.clone());
    renderer.set_trace_logger(trace.clone());

    script(&backend);
    renderer.render(txml, tss);
    assert_eq!(trace.flush_count(), 1);
    trace
}

#[test]
fn hello_window_trace() {
    let trace = render_traced(
        r#"<App><Body><Window title="T"><Text>Hi</Text></Window></Body></App>"#,
        "",
        |_| {},
    );

    insta::assert_snapshot!(trace.to_text(), @r#"
    // --- start frame ---
    ImGui.Begin("T");
    ImGui.Text("Hi");
    ImGui.End();
    // --- end frame ---
    "#);
}

#[test]
fn styled_panel_trace() {
    let trace = render_traced(
        r#"
        <App>
          <Body>
            <Window title="Panel">
              <Text>Ready</Text>
              <SameLine />
              <Button onClick="go">Go</Button>
            </Window>
          </Body>
        </App>
        "#,
        r#"
        scope { accent: 0x336699FF; }
        Window { width: 320; text-color: 0xEEEEEEFF; }
        Button { button-color: accent; }
        "#,
        |_| {},
    );

    insta::assert_snapshot!(trace.to_text(), @r#"
    // --- start frame ---
    ImGui.SetNextWindowSize([320, 200], ImGui.Cond.Once);
    ImGui.PushStyleColor(ImGui.Col.Text, 0xEEEEEEFF);
    ImGui.Begin("Panel");
    ImGui.Text("Ready");
    ImGui.SameLine(0, -1);
    ImGui.PushStyleColor(ImGui.Col.Button, 0x336699FF);
    ImGui.PushStyleColor(ImGui.Col.ButtonHovered, 0x5B8EC1FF);
    ImGui.PushStyleColor(ImGui.Col.ButtonActive, 0x013467FF);
    ImGui.Button("Go");
    ImGui.PopStyleColor(3);
    ImGui.PopStyleColor(1);
    ImGui.End();
    // --- end frame ---
    "#);
}

#[test]
fn form_widgets_trace() {
    let trace = render_traced(
        r#"<App><Window title="Form"><InputText label="Name" hint="your name" /><SliderFloat label="Volume" max="10" /><Checkbox label="Agree" /><Separator /></Window></App>"#,
        "InputText { width: 120; }",
        |_| {},
    );

    insta::assert_snapshot!(trace.to_text(), @r#"
    // --- start frame ---
    ImGui.Begin("Form");
    ImGui.SetNextItemWidth(120);
    ImGui.InputTextWithHint("Name", "your name", "", 256);
    ImGui.SliderFloat("Volume", 0.5, 0, 10);
    ImGui.Checkbox("Agree", false);
    ImGui.Separator();
    ImGui.End();
    // --- end frame ---
    "#);
}

#[test]
fn failing_child_trace() {
    let trace = render_traced(
        r#"<App><Window title="W"><Text>boom</Text><Text>after</Text></Window></App>"#,
        "",
        |backend| backend.fail_text("boom"),
    );

    insta::assert_snapshot!(trace.to_text(), @r#"
    // --- start frame ---
    ImGui.Begin("W");
    ImGui.Text("boom");
    // Error: Failed to render Text - backend call text failed: cannot draw 'boom'
    ImGui.Text("after");
    ImGui.End();
    // --- end frame ---
    "#);
}

#[test]
fn parse_error_trace() {
    let trace = render_traced("<App><Window title=\"x\"></App>", "", |_| {});

    insta::assert_snapshot!(trace.to_text(), @r#"
    // --- start frame ---
    ImGui.Begin("Error");
    ImGui.Text("TXML Parse Error: mismatched closing tag: expected </Window> but found </App> at line 1, column 26");
    ImGui.End();
    // --- end frame ---
    "#);
}
