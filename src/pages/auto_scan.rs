//! AutoScan page - prescription upload form and analysis report

use leptos::prelude::*;
use web_sys::{File, HtmlInputElement, Url};
use crate::components::{ReportCard, ReportSkeleton, SummaryCard, SummaryHeader};
use crate::forms::{ReportPhase, RequiredFields};
use crate::reports::PRESCRIPTION_REPORT;
use crate::state::AppSession;
use crate::task::TaskScope;
use crate::types::{ImageAttachment, ScanForm};

fn attachment_from_file(file: &File) -> Option<ImageAttachment> {
    if !file.type_().starts_with("image/") {
        tracing::warn!("Ignoring non-image upload {}", file.name());
        return None;
    }
    match Url::create_object_url_with_blob(file) {
        Ok(preview_url) => Some(ImageAttachment {
            file_name: file.name(),
            preview_url,
        }),
        Err(e) => {
            tracing::warn!("Could not preview {}: {:?}", file.name(), e);
            None
        }
    }
}

fn release(attachment: Option<ImageAttachment>) {
    if let Some(attachment) = attachment {
        let _ = Url::revoke_object_url(&attachment.preview_url);
    }
}

#[component]
pub fn AutoScanPage() -> impl IntoView {
    let session = expect_context::<AppSession>();
    let report_delay = session.config.report_delay();

    let form = RwSignal::new(ScanForm::default());
    let phase = RwSignal::new(ReportPhase::default());
    let tasks = TaskScope::new();

    // Revoke the preview still attached when the page goes away.
    on_cleanup(move || release(form.try_update_untracked(|f| f.take_image()).flatten()));

    let on_submit = {
        let tasks = tasks.clone();
        move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();
            let submitted = form.with_untracked(|f| phase.try_update(|p| p.submit(f)));
            match submitted {
                Some(Ok(())) => {
                    tasks.spawn_after(report_delay, move || {
                        phase.update(|p| {
                            p.finish();
                        });
                    });
                }
                Some(Err(e)) => tracing::debug!("Prescription not submitted: {}", e),
                None => {}
            }
        }
    };

    let on_edit = Callback::new(move |_: ()| {
        tasks.cancel_all();
        phase.update(|p| p.edit());
    });

    let collecting = Memo::new(move |_| phase.get().is_collecting());

    view! {
        {move || {
            if collecting.get() {
                view! { <ScanFormView form=form on_submit=on_submit.clone() /> }.into_any()
            } else {
                view! { <ScanReport form=form phase=phase on_edit=on_edit /> }.into_any()
            }
        }}
    }
}

#[component]
fn ScanFormView(
    form: RwSignal<ScanForm>,
    on_submit: impl Fn(web_sys::SubmitEvent) + 'static,
) -> impl IntoView {
    let drag_active = RwSignal::new(false);
    let can_submit = Signal::derive(move || form.with(|f| f.is_complete()));

    let set_image = move |file: Option<File>| {
        if let Some(attachment) = file.as_ref().and_then(attachment_from_file) {
            let previous = form.try_update(|f| f.replace_image(attachment)).flatten();
            release(previous);
        }
    };

    let on_drag_over = move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        drag_active.set(true);
    };
    let on_drag_leave = move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        drag_active.set(false);
    };
    let on_drop = move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        drag_active.set(false);
        let file = ev
            .data_transfer()
            .and_then(|dt| dt.files())
            .and_then(|files| files.get(0));
        set_image(file);
    };
    let on_browse = move |ev: web_sys::Event| {
        let file = event_target::<HtmlInputElement>(&ev)
            .files()
            .and_then(|files| files.get(0));
        set_image(file);
    };
    let remove_image = move |_: web_sys::MouseEvent| {
        let previous = form.try_update(|f| f.take_image()).flatten();
        release(previous);
    };

    view! {
        <div class="p-6 max-w-3xl mx-auto">
            <div class="card bg-white rounded-lg border border-gray-200 p-6">
                <h2 class="text-xl font-semibold text-gray-900">"Prescription Analysis"</h2>
                <p class="text-gray-600 mb-6">
                    "Upload your prescription for detailed analysis and recommendations"
                </p>

                <form on:submit=on_submit class="space-y-6">
                    <div class="space-y-2">
                        <label>"Prescription Image *"</label>
                        <div
                            class=move || format!(
                                "border-2 border-dashed rounded-lg p-8 text-center transition-colors {}",
                                if drag_active.get() { "border-blue-600 bg-blue-50" } else { "border-gray-300" }
                            )
                            on:dragenter=on_drag_over
                            on:dragover=on_drag_over
                            on:dragleave=on_drag_leave
                            on:drop=on_drop
                        >
                            {move || match form.with(|f| f.image.clone()) {
                                Some(image) => view! {
                                    <div class="space-y-4">
                                        <img src=image.preview_url alt="Prescription preview" class="max-h-48 mx-auto rounded" />
                                        <p class="text-sm text-gray-500">{image.file_name}</p>
                                        <button type="button" on:click=remove_image class="btn btn-outline">
                                            "Remove Image"
                                        </button>
                                    </div>
                                }.into_any(),
                                None => view! {
                                    <div>
                                        <div class="text-5xl mb-4 text-gray-400">"⬆"</div>
                                        <p class="mb-2 text-gray-700">"Drag and drop your prescription image here, or"</p>
                                        <label>
                                            <input type="file" class="hidden" accept="image/*" on:change=on_browse />
                                            <span class="text-blue-600 hover:underline cursor-pointer">"browse files"</span>
                                        </label>
                                    </div>
                                }.into_any(),
                            }}
                        </div>
                    </div>

                    <div class="space-y-2">
                        <label for="prescriptionName">"Prescription Name *"</label>
                        <input
                            id="prescriptionName"
                            placeholder="Enter medication name"
                            prop:value=move || form.with(|f| f.prescription_name.clone())
                            on:input=move |ev| form.update(|f| f.prescription_name = event_target_value(&ev))
                            required=true
                            class="input w-full"
                        />
                    </div>

                    <div class="space-y-2">
                        <label for="symptoms">"Symptoms *"</label>
                        <textarea
                            id="symptoms"
                            rows="3"
                            placeholder="Describe your symptoms..."
                            prop:value=move || form.with(|f| f.symptoms.clone())
                            on:input=move |ev| form.update(|f| f.symptoms = event_target_value(&ev))
                            required=true
                            class="input w-full"
                        ></textarea>
                    </div>

                    <div class="space-y-2">
                        <label for="duration">"Duration of Symptoms *"</label>
                        <input
                            id="duration"
                            placeholder="e.g., 3 days, 1 week"
                            prop:value=move || form.with(|f| f.duration.clone())
                            on:input=move |ev| form.update(|f| f.duration = event_target_value(&ev))
                            required=true
                            class="input w-full"
                        />
                    </div>

                    <div class="space-y-2">
                        <label for="customQuery">"Custom Query (Optional)"</label>
                        <textarea
                            id="customQuery"
                            rows="2"
                            placeholder="Any specific questions about this prescription?"
                            prop:value=move || form.with(|f| f.custom_query.clone())
                            on:input=move |ev| form.update(|f| f.custom_query = event_target_value(&ev))
                            class="input w-full"
                        ></textarea>
                    </div>

                    <div class="flex items-center justify-between p-4 bg-gray-50 rounded-lg">
                        <div>
                            <label for="alternates">"Include Alternate Medications"</label>
                            <p class="text-gray-600">"Show alternative medication options"</p>
                        </div>
                        <input
                            id="alternates"
                            type="checkbox"
                            role="switch"
                            prop:checked=move || form.with(|f| f.include_alternates)
                            on:change=move |ev| form.update(|f| f.include_alternates = event_target_checked(&ev))
                        />
                    </div>

                    <button
                        type="submit"
                        disabled=move || !can_submit.get()
                        class="btn btn-primary w-full bg-blue-600 hover:bg-blue-700"
                    >
                        "Analyze Prescription"
                    </button>
                </form>
            </div>
        </div>
    }
}

#[component]
fn ScanReport(
    form: RwSignal<ScanForm>,
    phase: RwSignal<ReportPhase>,
    on_edit: Callback<()>,
) -> impl IntoView {
    let submitted = form.get_untracked();
    let report = &PRESCRIPTION_REPORT;
    let alternates = report.alternates_for(submitted.include_alternates);
    let custom_query = Some(submitted.custom_query.clone()).filter(|q| !q.trim().is_empty());

    view! {
        <div class="flex h-full">
            // Summary
            <div class="w-2/5 bg-blue-50 p-6 overflow-auto border-r border-gray-200">
                <SummaryHeader title="Prescription Summary" on_edit=on_edit />
                <div class="space-y-4">
                    {submitted.image.clone().map(|image| view! {
                        <div class="card bg-white rounded-lg border border-gray-200 p-4">
                            <h3 class="flex items-center gap-2 font-medium text-gray-900 mb-2">
                                <span class="text-blue-600">"🖼"</span>
                                "Prescription Image"
                            </h3>
                            <img src=image.preview_url alt="Prescription" class="w-full rounded" />
                        </div>
                    })}
                    <SummaryCard title="Medication Name" body=submitted.prescription_name />
                    <SummaryCard title="Symptoms" body=submitted.symptoms />
                    <SummaryCard title="Duration" body=submitted.duration />
                    {custom_query.map(|query| view! { <SummaryCard title="Custom Query" body=query /> })}
                </div>
            </div>

            // Report
            <div class="flex-1 p-6 overflow-auto">
                <div class="max-w-4xl">
                    <h2 class="text-gray-900 text-lg font-semibold mb-6">"Analysis Report"</h2>
                    <Show
                        when=move || phase.get() == ReportPhase::Ready
                        fallback=|| view! { <ReportSkeleton /> }
                    >
                        <div class="space-y-6">
                            <ReportCard title="Medication Details">
                                <LabeledValues rows=report.details />
                            </ReportCard>

                            <ReportCard title="Dosage Information">
                                <LabeledValues rows=report.dosage />
                            </ReportCard>

                            <ReportCard title="⚠ Warnings & Precautions">
                                <ul class="space-y-2 text-gray-700">
                                    {report.warnings.iter().map(|w| view! { <li>{format!("• {}", w)}</li> }).collect::<Vec<_>>()}
                                </ul>
                            </ReportCard>

                            <ReportCard title="Drug Interactions">
                                <div class="space-y-2">
                                    <p class="text-gray-700">"May interact with:"</p>
                                    <div class="flex gap-2 flex-wrap">
                                        {report.interactions.iter().map(|drug| view! {
                                            <span class="badge border border-gray-300 px-2 py-1 rounded text-sm">{*drug}</span>
                                        }).collect::<Vec<_>>()}
                                    </div>
                                </div>
                            </ReportCard>

                            {(!alternates.is_empty()).then(|| view! {
                                <ReportCard title="Alternate Medications">
                                    <div class="space-y-4">
                                        {alternates.iter().map(|alt| view! {
                                            <div class="p-4 bg-gray-50 rounded-lg">
                                                <h4 class="text-gray-900 font-medium mb-2">{alt.name}</h4>
                                                <p class="text-gray-700 mb-2">{alt.description}</p>
                                                <div class="flex gap-2">
                                                    {alt.tags.iter().map(|tag| view! {
                                                        <span class="badge bg-green-100 text-green-800 border border-green-200 px-2 py-1 rounded text-sm">
                                                            {*tag}
                                                        </span>
                                                    }).collect::<Vec<_>>()}
                                                </div>
                                            </div>
                                        }).collect::<Vec<_>>()}
                                    </div>
                                </ReportCard>
                            })}

                            <button class="btn btn-primary bg-blue-600 hover:bg-blue-700">"⬇ Export Analysis"</button>
                        </div>
                    </Show>
                </div>
            </div>
        </div>
    }
}

#[component]
fn LabeledValues(rows: &'static [(&'static str, &'static str)]) -> impl IntoView {
    view! {
        <div class="space-y-3">
            {rows.iter().map(|(label, value)| view! {
                <div>
                    <p class="text-gray-600">{*label}</p>
                    <p class="text-gray-900">{*value}</p>
                </div>
            }).collect::<Vec<_>>()}
        </div>
    }
}
