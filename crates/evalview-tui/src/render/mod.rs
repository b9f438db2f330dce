//! Main render/view function (View in TEA pattern)


use evalview_app::state::{AppState, FocusedPanel, UiMode};
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use super::{layout, widgets};
use crate::line_cache::RenderCache;
use crate::theme::{palette, styles};

/// Render the complete UI (View function in TEA)
///
/// Only the scroll states are written, to record content sizes. Panel rows
/// come from `cache` while the record, mode and widths are unchanged.
pub fn view(frame: &mut Frame, state: &mut AppState, cache: &mut RenderCache) {
    let area = frame.area();

    // Fill entire terminal with deepest background color
    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);
    render_header(frame, state, areas.header);
    render_body(frame, state, cache, areas.body);
    frame.render_widget(widgets::StatusBar::new(state), areas.footer);

    match state.ui_mode {
        UiMode::RunPicker => {
            let labels = state.runs.iter().map(|r| r.label.as_str()).collect();
            frame.render_widget(
                widgets::Picker::new("Select Run", labels)
                    .selected(state.selected_run)
                    .cursor(state.picker_cursor),
                area,
            );
        }
        UiMode::CasePicker => {
            let labels = state.cases.iter().map(|c| c.label.as_str()).collect();
            frame.render_widget(
                widgets::Picker::new("Select Test Case", labels)
                    .selected(state.selected_case)
                    .cursor(state.picker_cursor),
                area,
            );
        }
        UiMode::Review => {}
    }
}

fn render_header(frame: &mut Frame, state: &AppState, area: Rect) {
    let mut header = widgets::SelectorHeader::new().loading(state.loading);
    if let (Some(idx), Some(entry)) = (state.selected_run, state.current_run()) {
        header = header.with_run(&entry.label, idx, state.runs.len());
    }
    if let (Some(idx), Some(case)) = (state.selected_case, state.current_case()) {
        header = header.with_case(&case.label, idx, state.cases.len());
    }
    frame.render_widget(header, area);
}

fn render_body(frame: &mut Frame, state: &mut AppState, cache: &mut RenderCache, area: Rect) {
    if let Some(notice) = &state.notice {
        frame.render_widget(widgets::NoticeBox::new(notice), area);
        return;
    }

    let preview_width = state.settings.ui.preview_width;
    let parts = state.review_mut();
    let Some(detail) = parts.detail else {
        let loading = Paragraph::new(Line::styled("Loading…", styles::text_muted()))
            .alignment(Alignment::Center);
        let middle = Rect::new(area.x, area.y + area.height / 2, area.width, 1);
        frame.render_widget(loading, middle.intersection(area));
        return;
    };
    let view = parts.view;
    let revision = parts.revision;
    let result = &detail.result;

    let run_details = widgets::RunDetailsSection::new(detail, view.run_details_expanded);
    let model_info = widgets::ModelInfo::new(result);
    let details_height = run_details.height();
    let markdown = result.markdown_pair();
    let review = layout::review(
        area,
        details_height + model_info.height(),
        preview_width,
        markdown.is_some(),
        view.full_diff_expanded,
    );

    let info_block = styles::glass_block(false).title(format!(" {} ", result.id));
    let info_inner = info_block.inner(review.info);
    frame.render_widget(info_block, review.info);
    let [details_area, model_area] =
        Layout::vertical([Constraint::Length(details_height), Constraint::Fill(1)])
            .areas(info_inner);
    frame.render_widget(run_details, details_area);
    frame.render_widget(model_info, model_area);

    frame.render_widget(widgets::FilePreview::new(parts.preview), review.preview);

    frame.render_stateful_widget(
        widgets::JsonDiffPanel::new(result, view.json_pane)
            .focused(view.focus == FocusedPanel::JsonDiff)
            .cached(revision, &mut cache.json),
        review.json,
        &mut view.json_scroll,
    );

    // Markdown panels only exist when both texts are present
    let Some((truth, predicted)) = markdown else {
        return;
    };
    if let Some(markdown_area) = review.markdown {
        frame.render_stateful_widget(
            widgets::MarkdownPanel::new(truth, predicted, view.markdown_view)
                .focused(view.focus == FocusedPanel::Markdown)
                .cached(revision, &mut cache.markdown),
            markdown_area,
            &mut view.markdown_scroll,
        );
    }
    if let Some(full_diff_area) = review.full_diff {
        frame.render_stateful_widget(
            widgets::FullDiffPanel::new(parts.full_diff, view.full_diff_expanded)
                .focused(view.focus == FocusedPanel::FullDiff)
                .cached(revision, &mut cache.full_diff),
            full_diff_area,
            &mut view.full_diff_scroll,
        );
    }
}
