//! Settings page

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use crate::state::AppSession;
use crate::types::{
    Settings, SettingsSection, BLOOD_TYPES, FONT_SIZE_MAX, FONT_SIZE_MIN, GENDERS, LANGUAGES,
    REMINDER_FREQUENCIES, THEMES, UNITS,
};

pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

type Options = &'static [(&'static str, &'static str)];

#[component]
pub fn SettingsPage() -> impl IntoView {
    let active = RwSignal::new(SettingsSection::Profile);
    let settings = RwSignal::new(Settings::default());

    view! {
        <div class="h-full flex bg-gray-50">
            // Section navigation
            <div class="w-64 bg-white border-r border-gray-200 p-4">
                <h2 class="text-gray-900 mb-4">"Settings"</h2>
                <nav class="space-y-1">
                    {SettingsSection::ALL.into_iter().map(|section| view! {
                        <button
                            on:click=move |_| active.set(section)
                            class=move || format!(
                                "w-full flex items-center gap-3 px-3 py-2 rounded-lg transition-colors {}",
                                if active.get() == section { "bg-blue-50 text-blue-600" } else { "text-gray-700 hover:bg-gray-50" }
                            )
                        >
                            <span class="text-lg">{section.icon()}</span>
                            <span>{section.label()}</span>
                        </button>
                    }).collect::<Vec<_>>()}
                </nav>
            </div>

            <div class="flex-1 overflow-auto">
                <div class="max-w-3xl p-6">
                    {move || match active.get() {
                        SettingsSection::Profile => view! { <ProfileSection settings=settings /> }.into_any(),
                        SettingsSection::Privacy => view! { <PrivacySection settings=settings /> }.into_any(),
                        SettingsSection::Notifications => view! { <NotificationsSection settings=settings /> }.into_any(),
                        SettingsSection::Medical => view! { <MedicalSection settings=settings /> }.into_any(),
                        SettingsSection::Preferences => view! { <PreferencesSection settings=settings /> }.into_any(),
                        SettingsSection::About => view! { <AboutSection /> }.into_any(),
                    }}
                </div>
            </div>
        </div>
    }
}

#[component]
fn SettingsCard(
    title: &'static str,
    description: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="card bg-white rounded-lg border border-gray-200">
            <div class="p-6 pb-2">
                <h3 class="text-lg font-semibold text-gray-900">{title}</h3>
                <p class="text-gray-600">{description}</p>
            </div>
            <div class="p-6 pt-4 space-y-6">
                {children()}
            </div>
        </div>
    }
}

#[component]
fn TextField(
    settings: RwSignal<Settings>,
    id: &'static str,
    label: &'static str,
    get: fn(&Settings) -> String,
    set: fn(&mut Settings, String),
    #[prop(default = "text")] input_type: &'static str,
    #[prop(default = "")] placeholder: &'static str,
) -> impl IntoView {
    view! {
        <div class="space-y-2">
            <label for=id>{label}</label>
            <input
                id=id
                type=input_type
                placeholder=placeholder
                prop:value=move || settings.with(get)
                on:input=move |ev| settings.update(|s| set(s, event_target_value(&ev)))
                class="input w-full"
            />
        </div>
    }
}

#[component]
fn SelectField(
    settings: RwSignal<Settings>,
    id: &'static str,
    label: &'static str,
    options: Options,
    get: fn(&Settings) -> String,
    set: fn(&mut Settings, String),
) -> impl IntoView {
    view! {
        <div class="space-y-2">
            <label for=id>{label}</label>
            <select
                id=id
                prop:value=move || settings.with(get)
                on:change=move |ev| settings.update(|s| set(s, event_target_value(&ev)))
                class="input w-full"
            >
                {options.iter().map(|(value, text)| view! {
                    <option value=*value>{*text}</option>
                }).collect::<Vec<_>>()}
            </select>
        </div>
    }
}

#[component]
fn SwitchRow(
    settings: RwSignal<Settings>,
    title: &'static str,
    description: &'static str,
    get: fn(&Settings) -> bool,
    set: fn(&mut Settings, bool),
) -> impl IntoView {
    view! {
        <div class="flex items-center justify-between">
            <div>
                <h4 class="text-gray-900">{title}</h4>
                <p class="text-gray-600">{description}</p>
            </div>
            <input
                type="checkbox"
                role="switch"
                prop:checked=move || settings.with(get)
                on:change=move |ev| settings.update(|s| set(s, event_target_checked(&ev)))
            />
        </div>
    }
}

#[component]
fn Separator() -> impl IntoView {
    view! { <hr class="border-gray-200" /> }
}

#[component]
fn OutlineButton(label: &'static str, #[prop(default = "")] icon: &'static str) -> impl IntoView {
    view! {
        <button class="btn btn-outline w-full justify-start">
            {(!icon.is_empty()).then(|| view! { <span class="mr-2">{icon}</span> })}
            {label}
        </button>
    }
}

#[component]
fn ProfileSection(settings: RwSignal<Settings>) -> impl IntoView {
    let session = expect_context::<AppSession>();
    let initials = session.config.initials();

    view! {
        <SettingsCard title="Profile Settings" description="Manage your personal information">
            <div class="flex items-center gap-4">
                <div class="h-20 w-20 rounded-full bg-blue-100 text-blue-600 flex items-center justify-center text-2xl">
                    {initials}
                </div>
                <button class="btn btn-outline">"⬆ Upload Photo"</button>
            </div>

            <TextField settings=settings id="fullName" label="Full Name"
                get=|s| s.full_name.clone() set=|s, v| s.full_name = v />
            <TextField settings=settings id="email" label="Email" input_type="email"
                get=|s| s.email.clone() set=|s, v| s.email = v />
            <TextField settings=settings id="dateOfBirth" label="Date of Birth" input_type="date"
                get=|s| s.date_of_birth.clone() set=|s, v| s.date_of_birth = v />
            <SelectField settings=settings id="gender" label="Gender" options=&GENDERS
                get=|s| s.gender.clone() set=|s, v| s.gender = v />

            <button class="btn btn-primary bg-blue-600 hover:bg-blue-700">"Save Changes"</button>
        </SettingsCard>
    }
}

#[component]
fn PrivacySection(settings: RwSignal<Settings>) -> impl IntoView {
    view! {
        <SettingsCard title="Privacy & Security" description="Manage your account security and privacy">
            <div class="space-y-4">
                <h4 class="text-gray-900">"Change Password"</h4>
                <div class="space-y-2">
                    <label for="currentPassword">"Current Password"</label>
                    <input id="currentPassword" type="password" class="input w-full" />
                </div>
                <div class="space-y-2">
                    <label for="newPassword">"New Password"</label>
                    <input id="newPassword" type="password" class="input w-full" />
                </div>
                <div class="space-y-2">
                    <label for="confirmPassword">"Confirm New Password"</label>
                    <input id="confirmPassword" type="password" class="input w-full" />
                </div>
                <button class="btn btn-primary bg-blue-600 hover:bg-blue-700">"Update Password"</button>
            </div>

            <Separator />

            <SwitchRow settings=settings title="Two-Factor Authentication"
                description="Add an extra layer of security to your account"
                get=|s| s.two_factor set=|s, v| s.two_factor = v />

            <Separator />

            <SwitchRow settings=settings title="Data Sharing"
                description="Share anonymized data to improve our services"
                get=|s| s.data_sharing set=|s, v| s.data_sharing = v />

            <Separator />

            <OutlineButton icon="⬇" label="Download My Data" />
        </SettingsCard>
    }
}

#[component]
fn NotificationsSection(settings: RwSignal<Settings>) -> impl IntoView {
    view! {
        <SettingsCard title="Notifications" description="Choose how you want to be notified">
            <SwitchRow settings=settings title="Email Notifications"
                description="Receive updates and reports via email"
                get=|s| s.email_notifications set=|s, v| s.email_notifications = v />
            <Separator />
            <SwitchRow settings=settings title="Push Notifications"
                description="Get alerts for reminders and health tips"
                get=|s| s.push_notifications set=|s, v| s.push_notifications = v />
            <Separator />
            <SelectField settings=settings id="reminderFrequency" label="Reminder Frequency"
                options=&REMINDER_FREQUENCIES
                get=|s| s.reminder_frequency.clone() set=|s, v| s.reminder_frequency = v />
        </SettingsCard>
    }
}

#[component]
fn MedicalSection(settings: RwSignal<Settings>) -> impl IntoView {
    view! {
        <SettingsCard title="Medical Information" description="Keep your medical details up to date">
            <div class="space-y-2">
                <label for="bloodType">"Blood Type"</label>
                <select
                    id="bloodType"
                    prop:value=move || settings.with(|s| s.blood_type.clone())
                    on:change=move |ev| settings.update(|s| s.blood_type = event_target_value(&ev))
                    class="input w-full"
                >
                    {BLOOD_TYPES.iter().map(|t| view! { <option value=*t>{*t}</option> }).collect::<Vec<_>>()}
                </select>
            </div>

            <Separator />

            <div class="space-y-4">
                <div class="flex items-center justify-between">
                    <h4 class="text-gray-900">"Emergency Contacts"</h4>
                    <button class="btn btn-outline btn-sm">"Add Contact"</button>
                </div>
                <div class="p-4 bg-gray-50 rounded-lg">
                    <p class="text-gray-700 mb-1">"Dr. Jane Smith"</p>
                    <p class="text-gray-600">"Primary Care Physician"</p>
                    <p class="text-gray-600">"+1 (555) 123-4567"</p>
                </div>
            </div>

            <Separator />

            <div class="space-y-4">
                <h4 class="text-gray-900">"Primary Care Physician"</h4>
                <TextField settings=settings id="physicianName" label="Physician Name"
                    placeholder="Dr. Jane Smith"
                    get=|s| s.physician_name.clone() set=|s, v| s.physician_name = v />
                <TextField settings=settings id="physicianPhone" label="Phone Number" input_type="tel"
                    placeholder="+1 (555) 123-4567"
                    get=|s| s.physician_phone.clone() set=|s, v| s.physician_phone = v />
            </div>

            <Separator />

            <div class="space-y-4">
                <h4 class="text-gray-900">"Insurance Information"</h4>
                <TextField settings=settings id="insuranceProvider" label="Insurance Provider"
                    get=|s| s.insurance_provider.clone() set=|s, v| s.insurance_provider = v />
                <TextField settings=settings id="policyNumber" label="Policy Number"
                    get=|s| s.policy_number.clone() set=|s, v| s.policy_number = v />
            </div>

            <button class="btn btn-primary bg-blue-600 hover:bg-blue-700">"Save Medical Info"</button>
        </SettingsCard>
    }
}

#[component]
fn PreferencesSection(settings: RwSignal<Settings>) -> impl IntoView {
    let on_font_size = move |ev: web_sys::Event| {
        if let Ok(size) = event_target_value(&ev).parse::<i64>() {
            settings.update(|s| s.set_font_size(size));
        }
    };

    view! {
        <div class="space-y-6">
            <SettingsCard title="App Preferences" description="Customize your app experience">
                <SelectField settings=settings id="language" label="Language" options=&LANGUAGES
                    get=|s| s.language.clone() set=|s, v| s.language = v />

                <Separator />

                <div class="space-y-2">
                    <h4 class="text-gray-900">"Theme"</h4>
                    <div class="flex gap-2">
                        {THEMES.iter().map(|(value, label)| {
                            let value = *value;
                            view! {
                                <button
                                    on:click=move |_| settings.update(|s| s.theme = value.to_string())
                                    class=move || format!(
                                        "btn flex-1 {}",
                                        if settings.with(|s| s.theme == value) { "btn-primary bg-blue-600 text-white" } else { "btn-outline" }
                                    )
                                >
                                    {*label}
                                </button>
                            }
                        }).collect::<Vec<_>>()}
                    </div>
                </div>

                <Separator />

                <div class="space-y-2">
                    <div class="flex items-center justify-between">
                        <h4 class="text-gray-900">"Font Size"</h4>
                        <span class="text-gray-600">{move || format!("{}px", settings.with(|s| s.font_size))}</span>
                    </div>
                    <input
                        type="range"
                        min=FONT_SIZE_MIN.to_string()
                        max=FONT_SIZE_MAX.to_string()
                        step="1"
                        prop:value=move || settings.with(|s| s.font_size.to_string())
                        on:input=on_font_size
                        class="w-full"
                    />
                </div>

                <Separator />

                <SelectField settings=settings id="units" label="Measurement Units" options=&UNITS
                    get=|s| s.units.clone() set=|s, v| s.units = v />
            </SettingsCard>

            <SettingsCard title="Data Management" description="Manage your stored data">
                <OutlineButton icon="🗑" label="Clear Chat History" />
                <OutlineButton icon="🗑" label="Delete All Assessments" />
                <OutlineButton icon="⬇" label="Export All Reports" />
            </SettingsCard>
        </div>
    }
}

#[component]
fn AboutSection() -> impl IntoView {
    let session = expect_context::<AppSession>();
    let navigate = use_navigate();

    let on_logout = move |_: web_sys::MouseEvent| {
        let destination = session.logout();
        navigate(destination, Default::default());
    };

    view! {
        <SettingsCard title="About & Support" description="App information and help resources">
            <div>
                <p class="text-gray-600 mb-1">"App Version"</p>
                <p class="text-gray-900">{APP_VERSION}</p>
            </div>

            <Separator />

            <div class="space-y-3">
                <OutlineButton label="Terms of Service" />
                <OutlineButton label="Privacy Policy" />
                <OutlineButton label="Contact Support" />
            </div>

            <Separator />

            <button on:click=on_logout class="btn w-full bg-red-600 hover:bg-red-700 text-white">
                "Log Out"
            </button>
        </SettingsCard>
    }
}
