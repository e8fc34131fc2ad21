//! AutoCheck page - symptom assessment form and report

use leptos::prelude::*;
use crate::components::{ReportCard, ReportSkeleton, SummaryCard, SummaryHeader};
use crate::forms::{ReportPhase, RequiredFields};
use crate::reports::HEALTH_REPORT;
use crate::state::AppSession;
use crate::task::TaskScope;
use crate::types::{travel_history_label, SymptomForm, TRAVEL_HISTORY};

#[component]
pub fn AutoCheckPage() -> impl IntoView {
    let session = expect_context::<AppSession>();
    let report_delay = session.config.report_delay();

    let form = RwSignal::new(SymptomForm::default());
    let phase = RwSignal::new(ReportPhase::default());
    let tasks = TaskScope::new();

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
                Some(Err(e)) => tracing::debug!("Assessment not submitted: {}", e),
                None => {}
            }
        }
    };

    // Editing abandons any report still being generated
    let on_edit = Callback::new(move |_: ()| {
        tasks.cancel_all();
        phase.update(|p| p.edit());
    });

    let collecting = Memo::new(move |_| phase.get().is_collecting());

    view! {
        {move || {
            if collecting.get() {
                view! { <AssessmentForm form=form on_submit=on_submit.clone() /> }.into_any()
            } else {
                view! { <AssessmentReport form=form phase=phase on_edit=on_edit /> }.into_any()
            }
        }}
    }
}

#[component]
fn AssessmentForm(
    form: RwSignal<SymptomForm>,
    on_submit: impl Fn(web_sys::SubmitEvent) + 'static,
) -> impl IntoView {
    let can_submit = Signal::derive(move || form.with(|f| f.is_complete()));

    view! {
        <div class="p-6 max-w-3xl mx-auto">
            <div class="card bg-white rounded-lg border border-gray-200 p-6">
                <h2 class="text-xl font-semibold text-gray-900">"Health Assessment"</h2>
                <p class="text-gray-600 mb-6">
                    "Please provide accurate information for a comprehensive health assessment"
                </p>

                <form on:submit=on_submit class="space-y-6">
                    <div class="space-y-2">
                        <label for="age">"Age *"</label>
                        <input
                            id="age"
                            type="number"
                            min="0"
                            placeholder="Enter your age"
                            prop:value=move || form.with(|f| f.age.clone())
                            on:input=move |ev| form.update(|f| f.age = event_target_value(&ev))
                            required=true
                            class="input w-full"
                        />
                    </div>

                    <div class="space-y-2">
                        <label for="symptoms">"Symptoms *"</label>
                        <textarea
                            id="symptoms"
                            rows="4"
                            placeholder="Describe your symptoms in detail..."
                            prop:value=move || form.with(|f| f.symptoms.clone())
                            on:input=move |ev| form.update(|f| f.symptoms = event_target_value(&ev))
                            required=true
                            class="input w-full"
                        ></textarea>
                    </div>

                    <div class="space-y-2">
                        <label for="medicalHistory">"Medical History *"</label>
                        <textarea
                            id="medicalHistory"
                            rows="3"
                            placeholder="Any pre-existing conditions, past surgeries, etc..."
                            prop:value=move || form.with(|f| f.medical_history.clone())
                            on:input=move |ev| form.update(|f| f.medical_history = event_target_value(&ev))
                            required=true
                            class="input w-full"
                        ></textarea>
                    </div>

                    <div class="space-y-2">
                        <label for="travelHistory">"Travel History *"</label>
                        <select
                            id="travelHistory"
                            prop:value=move || form.with(|f| f.travel_history.clone())
                            on:change=move |ev| form.update(|f| f.travel_history = event_target_value(&ev))
                            required=true
                            class="input w-full"
                        >
                            <option value="" disabled=true>"Select travel history"</option>
                            {TRAVEL_HISTORY.iter().map(|(value, label)| view! {
                                <option value=*value>{*label}</option>
                            }).collect::<Vec<_>>()}
                        </select>
                    </div>

                    <div class="space-y-2">
                        <label for="allergies">"Allergies *"</label>
                        <input
                            id="allergies"
                            placeholder="e.g., Penicillin, Peanuts, None"
                            prop:value=move || form.with(|f| f.allergies.clone())
                            on:input=move |ev| form.update(|f| f.allergies = event_target_value(&ev))
                            required=true
                            class="input w-full"
                        />
                    </div>

                    <button
                        type="submit"
                        disabled=move || !can_submit.get()
                        class="btn btn-primary w-full bg-blue-600 hover:bg-blue-700"
                    >
                        "Submit Assessment"
                    </button>
                </form>
            </div>
        </div>
    }
}

#[component]
fn AssessmentReport(
    form: RwSignal<SymptomForm>,
    phase: RwSignal<ReportPhase>,
    on_edit: Callback<()>,
) -> impl IntoView {
    let submitted = form.get_untracked();
    let report = &HEALTH_REPORT;

    view! {
        <div class="flex h-full">
            // Summary
            <div class="w-2/5 bg-blue-50 p-6 overflow-auto border-r border-gray-200">
                <SummaryHeader title="Assessment Summary" on_edit=on_edit />
                <div class="space-y-4">
                    <SummaryCard icon="ⓘ" title="Age" body=format!("{} years old", submitted.age) />
                    <SummaryCard icon="ⓘ" title="Symptoms" body=submitted.symptoms />
                    <SummaryCard icon="ⓘ" title="Medical History" body=submitted.medical_history />
                    <SummaryCard
                        icon="ⓘ"
                        title="Travel History"
                        body=travel_history_label(&submitted.travel_history).to_string()
                    />
                    <SummaryCard icon="ⓘ" title="Allergies" body=submitted.allergies />
                </div>
            </div>

            // Report
            <div class="flex-1 p-6 overflow-auto">
                <div class="max-w-4xl">
                    <h2 class="text-gray-900 text-lg font-semibold mb-6">"Health Assessment Report"</h2>
                    <Show
                        when=move || phase.get() == ReportPhase::Ready
                        fallback=|| view! { <ReportSkeleton /> }
                    >
                        <div class="space-y-6">
                            <ReportCard title="Risk Assessment">
                                <div class="space-y-4">
                                    <span class="badge bg-yellow-100 text-yellow-800 border border-yellow-200 px-2 py-1 rounded">
                                        {report.risk_label}
                                    </span>
                                    <p class="text-gray-700">{report.summary}</p>
                                </div>
                            </ReportCard>

                            <ReportCard title="Recommendations">
                                <ul class="space-y-3">
                                    {report.recommendations.iter().map(|item| view! {
                                        <li class="flex items-start gap-2">
                                            <span class="text-green-600 shrink-0">"✔"</span>
                                            <span class="text-gray-700">{*item}</span>
                                        </li>
                                    }).collect::<Vec<_>>()}
                                </ul>
                            </ReportCard>

                            <ReportCard title="Next Steps">
                                <div class="space-y-3">
                                    {report.next_steps.iter().enumerate().map(|(i, (heading, body))| view! {
                                        <p class="text-gray-700">
                                            {format!("{}. ", i + 1)}
                                            <strong>{*heading}</strong>
                                            {format!(" {}", body)}
                                        </p>
                                    }).collect::<Vec<_>>()}
                                </div>
                            </ReportCard>

                            <div class="flex gap-3">
                                <button class="btn btn-primary bg-blue-600 hover:bg-blue-700">"⬇ Download Report"</button>
                                <button class="btn btn-outline">"Share"</button>
                            </div>
                        </div>
                    </Show>
                </div>
            </div>
        </div>
    }
}
