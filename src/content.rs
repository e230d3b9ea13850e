//! The six static content sections and their shared building blocks.
//! Sections own no state; the interactive ones receive their tab/accordion
//! signals from the composition root.

use leptos::prelude::*;

use crate::charts::{PipelineChart, PrevalenceChart};
use crate::ui_state::{
    AccordionItem, ExclusiveSelect, ExclusiveToggle, SectionId, SymptomTab, TreatmentTab,
};

#[component]
pub fn Card(#[prop(optional)] class: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class=format!(
            "bg-white rounded-xl shadow-md transition duration-300 ease-in-out hover:-translate-y-1 hover:shadow-lg {class}"
        )>{children()}</div>
    }
}

#[component]
pub fn OverviewSection() -> impl IntoView {
    view! {
        <section id=SectionId::Overview.anchor() class="pt-16 -mt-16">
            <div class="text-center mb-12">
                <h1 class="text-4xl font-bold tracking-tight text-[#3D405B] sm:text-5xl md:text-6xl">
                    "Enfermedad de Parkinson"
                </h1>
                <p class="mt-3 max-w-2xl mx-auto text-xl text-gray-500 sm:mt-4">
                    "Un viaje interactivo para entender el segundo trastorno neurodegenerativo más común del mundo."
                </p>
            </div>

            <Card class="p-8 mb-12">
                <p class="text-lg text-gray-700 leading-relaxed">
                    "Esta aplicación interactiva traduce el complejo informe científico sobre la enfermedad de Parkinson (EP) en una experiencia de aprendizaje accesible. La EP es un trastorno crónico y progresivo del sistema nervioso que afecta principalmente al movimiento, pero también tiene una amplia gama de síntomas no motores. Se caracteriza por la pérdida de células cerebrales productoras de dopamina. Aquí, exploraremos su impacto, historia, causas, síntomas, y las fronteras de la investigación, permitiéndole navegar por la información a su propio ritmo."
                </p>
            </Card>

            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8 mb-12">
                <Card class="p-6 text-center">
                    <h3 class="text-5xl font-bold text-[#81B29A]">">10M"</h3>
                    <p class="mt-2 text-lg font-medium">"Personas afectadas globalmente"</p>
                    <p class="text-sm text-gray-500">"La prevalencia se ha duplicado desde 1990."</p>
                </Card>
                <Card class="p-6 text-center">
                    <h3 class="text-5xl font-bold text-[#81B29A]">"~60"</h3>
                    <p class="mt-2 text-lg font-medium">"Edad promedio de inicio"</p>
                    <p class="text-sm text-gray-500">"El riesgo aumenta significativamente con la edad."</p>
                </Card>
                <Card class="p-6 text-center">
                    <h3 class="text-5xl font-bold text-[#81B29A]">"1.5x"</h3>
                    <p class="mt-2 text-lg font-medium">"Más común en hombres"</p>
                    <p class="text-sm text-gray-500">"Los hombres tienen mayor probabilidad de desarrollar EP que las mujeres."</p>
                </Card>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-2 gap-8 items-center">
                <Card class="p-6">
                    <h2 class="text-2xl font-bold mb-4 text-center">"Hitos Históricos Clave"</h2>
                    <ul class="space-y-4">
                        <Milestone icon="📜" year="1817"
                            text="James Parkinson publica su \"Ensayo sobre la Parálisis Agitante\", la primera descripción clínica sistemática." />
                        <Milestone icon="🔬" year="1960"
                            text="Se descubre la deficiencia de dopamina como causa clave, abriendo la puerta a tratamientos racionales." />
                        <Milestone icon="💊" year="1960s"
                            text="La introducción de la Levodopa revoluciona el tratamiento sintomático, marcando una \"edad de oro\" en la terapia de la EP." />
                        <Milestone icon="🧬" year="1997-Hoy"
                            text="Se identifican los primeros genes (SNCA, LRRK2, GBA1), impulsando la investigación hacia terapias personalizadas." />
                    </ul>
                </Card>
                <Card class="p-6">
                    <h2 class="text-2xl font-bold mb-4 text-center">"Prevalencia por Edad"</h2>
                    <PrevalenceChart />
                    <p class="text-center text-sm text-gray-500 mt-4">
                        "La probabilidad de desarrollar Parkinson aumenta drásticamente con la edad."
                    </p>
                </Card>
            </div>
        </section>
    }
}

#[component]
fn Milestone(icon: &'static str, year: &'static str, text: &'static str) -> impl IntoView {
    view! {
        <li class="flex items-start">
            <span class="text-xl text-[#81B29A] mr-3 mt-1">{icon}</span>
            <div>
                <h4 class="font-semibold">{year}</h4>
                <p class="text-gray-600">{text}</p>
            </div>
        </li>
    }
}

#[component]
pub fn CausesSection() -> impl IntoView {
    view! {
        <section id=SectionId::Causes.anchor() class="pt-16 -mt-16">
            <h2 class="text-3xl font-bold text-center mb-4">"Causas y Factores de Riesgo"</h2>
            <p class="text-center max-w-3xl mx-auto text-lg text-gray-600 mb-12">
                "La enfermedad de Parkinson tiene una etiología multifactorial, lo que significa que surge de una compleja interacción entre la predisposición genética y la exposición a factores ambientales a lo largo de la vida. No hay una única causa, sino una combinación de factores que contribuyen al riesgo de cada individuo."
            </p>
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                <Card class="p-6">
                    <div class="flex items-center mb-4">
                        <span class="text-3xl mr-4">"🧬"</span>
                        <h3 class="text-2xl font-semibold">"Factores Genéticos"</h3>
                    </div>
                    <p class="text-gray-600">
                        "Entre el 10-20% de los casos tienen un componente genético conocido. Mutaciones en genes como "
                        <span class="font-mono bg-gray-100 p-1 rounded">"SNCA"</span>", "
                        <span class="font-mono bg-gray-100 p-1 rounded">"LRRK2"</span>", y "
                        <span class="font-mono bg-gray-100 p-1 rounded">"GBA1"</span>
                        " aumentan significativamente el riesgo. La EP de inicio temprano (<50 años) tiene una mayor probabilidad de ser de origen genético."
                    </p>
                </Card>
                <Card class="p-6">
                    <div class="flex items-center mb-4">
                        <span class="text-3xl mr-4">"🌿"</span>
                        <h3 class="text-2xl font-semibold">"Factores Ambientales"</h3>
                    </div>
                    <p class="text-gray-600">
                        "La exposición a largo plazo a ciertas sustancias químicas está fuertemente vinculada a un mayor riesgo. Esto incluye pesticidas y herbicidas (como paraquat y rotenona), solventes industriales y metales pesados. La geografía del riesgo sugiere focos en áreas industriales o agrícolas."
                    </p>
                </Card>
                <Card class="p-6">
                    <div class="flex items-center mb-4">
                        <span class="text-3xl mr-4">"🛡️"</span>
                        <h3 class="text-2xl font-semibold">"Estilo de Vida y Otros"</h3>
                    </div>
                    <p class="text-gray-600">
                        "El "<strong>"envejecimiento"</strong>
                        " es el factor de riesgo más importante. Traumatismos craneales repetidos también pueden aumentar el riesgo. Por otro lado, la actividad física regular y, curiosamente, el consumo de cafeína y el tabaquismo, se han asociado con un riesgo reducido (factores protectores)."
                    </p>
                </Card>
            </div>
        </section>
    }
}

fn accordion_body(item: AccordionItem) -> &'static str {
    match item {
        AccordionItem::Neuropsychiatric => {
            "Incluyen depresión, ansiedad, apatía, y en fases avanzadas, deterioro cognitivo y demencia. Los trastornos del control de impulsos (ej. ludopatía) pueden ser un efecto secundario de la medicación."
        }
        AccordionItem::SleepDisorders => {
            "El Trastorno de Conducta del Sueño REM (actuar los sueños) es un fuerte predictor temprano. También son comunes el insomnio y la somnolencia diurna excesiva."
        }
        AccordionItem::Autonomic => {
            "Afecta funciones corporales automáticas. Incluye estreñimiento (muy común y temprano), problemas urinarios, caídas de presión arterial al ponerse de pie (hipotensión ortostática) y sudoración excesiva."
        }
        AccordionItem::Sensory => {
            "La pérdida del sentido del olfato (hiposmia) es uno de los signos más tempranos y comunes. También pueden presentarse dolor, fatiga intensa y alteraciones visuales."
        }
    }
}

#[component]
pub fn SymptomsSection(
    tabs: ReadSignal<ExclusiveSelect<SymptomTab>>,
    set_tabs: WriteSignal<ExclusiveSelect<SymptomTab>>,
    accordion: ReadSignal<ExclusiveToggle<AccordionItem>>,
    set_accordion: WriteSignal<ExclusiveToggle<AccordionItem>>,
) -> impl IntoView {
    view! {
        <section id=SectionId::Symptoms.anchor() class="pt-16 -mt-16">
            <h2 class="text-3xl font-bold text-center mb-4">"Síntomas y Fases de la Enfermedad"</h2>
            <p class="text-center max-w-3xl mx-auto text-lg text-gray-600 mb-12">
                "Los síntomas del Parkinson son diversos y van mucho más allá del temblor. Se dividen en motores (relacionados con el movimiento) y no motores. Muchos síntomas no motores aparecen años antes del diagnóstico (fase prodrómica), ofreciendo una ventana para la detección temprana."
            </p>
            <div class="mb-8 flex justify-center">
                <div class="flex space-x-1 rounded-lg p-1 bg-gray-200">
                    {SymptomTab::ALL.into_iter().map(|tab| view! {
                        <button
                            on:click=move |_| set_tabs.update(|t| { t.select(tab); })
                            class=move || format!(
                                "px-4 py-2 text-sm font-medium rounded-md transition {}",
                                if tabs.get().is_selected(tab) {
                                    "bg-[#81B29A] text-white"
                                } else {
                                    "bg-gray-200 text-[#3D405B]"
                                }
                            )
                        >
                            {tab.label()}
                        </button>
                    }).collect::<Vec<_>>()}
                </div>
            </div>
            <Show when=move || tabs.get().is_selected(SymptomTab::Motor)>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                    <Card class="p-6">
                        <h4 class="font-bold text-xl mb-2">"Temblor de Reposo"</h4>
                        <p>"Sacudida rítmica, usualmente en una mano o dedos (\"rodamiento de píldoras\"), que ocurre cuando la extremidad está relajada y disminuye con el movimiento intencional."</p>
                    </Card>
                    <Card class="p-6">
                        <h4 class="font-bold text-xl mb-2">"Bradicinesia"</h4>
                        <p>"Lentitud generalizada del movimiento. Dificulta iniciar acciones y realizar tareas cotidianas. Conduce a una expresión facial reducida (\"cara de máscara\") y menor parpadeo."</p>
                    </Card>
                    <Card class="p-6">
                        <h4 class="font-bold text-xl mb-2">"Rigidez"</h4>
                        <p>"Aumento del tono muscular que causa resistencia al movimiento pasivo de las extremidades. Puede provocar dolor y calambres."</p>
                    </Card>
                    <Card class="p-6">
                        <h4 class="font-bold text-xl mb-2">"Inestabilidad Postural"</h4>
                        <p>"Problemas de equilibrio y coordinación que aparecen en etapas más avanzadas, aumentando significativamente el riesgo de caídas."</p>
                    </Card>
                </div>
            </Show>
            <Show when=move || tabs.get().is_selected(SymptomTab::NonMotor)>
                <div class="space-y-4">
                    {AccordionItem::ALL.into_iter().map(|item| view! {
                        <div class="bg-white rounded-lg shadow-sm overflow-hidden">
                            <button
                                on:click=move |_| set_accordion.update(|a| a.toggle(item))
                                class="w-full text-left p-4 font-semibold text-lg flex justify-between items-center"
                            >
                                <span>{item.label()}</span>
                                <span class=move || format!(
                                    "transform transition-transform duration-300 {}",
                                    if accordion.get().is_open(item) { "rotate-180" } else { "" }
                                )>"▼"</span>
                            </button>
                            <div class=move || format!(
                                "transition-all duration-500 ease-in-out {}",
                                if accordion.get().is_open(item) { "max-h-96" } else { "max-h-0" }
                            )>
                                <div class="px-4 pb-4 text-gray-600">
                                    <p>{accordion_body(item)}</p>
                                </div>
                            </div>
                        </div>
                    }).collect::<Vec<_>>()}
                </div>
            </Show>
        </section>
    }
}

#[component]
pub fn DiagnosisSection() -> impl IntoView {
    view! {
        <section id=SectionId::Diagnosis.anchor() class="pt-16 -mt-16">
            <h2 class="text-3xl font-bold text-center mb-4">"Diagnóstico y Seguimiento"</h2>
            <p class="text-center max-w-3xl mx-auto text-lg text-gray-600 mb-12">
                "Actualmente no existe una prueba única para diagnosticar el Parkinson. El diagnóstico se basa en la historia clínica, un examen neurológico y la respuesta a la medicación. Sin embargo, la tecnología está revolucionando la detección y el seguimiento."
            </p>
            <div class="grid grid-cols-1 md:grid-cols-3 gap-8 text-center">
                <Card class="p-6">
                    <h3 class="text-xl font-bold mb-2">"1. Examen Clínico"</h3>
                    <p class="text-gray-600">"El neurólogo busca la presencia de síntomas motores cardinales (bradicinesia + temblor o rigidez), su inicio asimétrico y una respuesta positiva a la levodopa."</p>
                </Card>
                <Card class="p-6">
                    <h3 class="text-xl font-bold mb-2">"2. Neuroimagen"</h3>
                    <p class="text-gray-600">"Pruebas como el DaTscan pueden confirmar una deficiencia de dopamina y ayudar a diferenciar la EP de otras condiciones como el temblor esencial. La RM se usa para descartar otras causas."</p>
                </Card>
                <Card class="p-6">
                    <h3 class="text-xl font-bold mb-2">"3. Biomarcadores Emergentes"</h3>
                    <p class="text-gray-600">"El futuro del diagnóstico. Incluye pruebas en sangre y líquido cefalorraquídeo para detectar α-sinucleína y el uso de wearables e IA para un monitoreo continuo y objetivo de los síntomas."</p>
                </Card>
            </div>
        </section>
    }
}

#[component]
pub fn TreatmentsSection(
    tabs: ReadSignal<ExclusiveSelect<TreatmentTab>>,
    set_tabs: WriteSignal<ExclusiveSelect<TreatmentTab>>,
) -> impl IntoView {
    view! {
        <section id=SectionId::Treatments.anchor() class="pt-16 -mt-16">
            <h2 class="text-3xl font-bold text-center mb-4">"Enfoques de Tratamiento"</h2>
            <p class="text-center max-w-3xl mx-auto text-lg text-gray-600 mb-12">
                "Aunque no hay cura, los tratamientos actuales pueden controlar los síntomas eficazmente, mejorando la calidad de vida. El enfoque es multidisciplinario y se personaliza para cada paciente, combinando fármacos, posibles cirugías y terapias de apoyo."
            </p>
            <div class="mb-8 flex justify-center">
                <div class="flex space-x-1 rounded-lg p-1 bg-gray-200">
                    {TreatmentTab::ALL.into_iter().map(|tab| view! {
                        <button
                            on:click=move |_| set_tabs.update(|t| { t.select(tab); })
                            class=move || format!(
                                "px-4 py-2 text-sm font-medium rounded-md transition {}",
                                if tabs.get().is_selected(tab) {
                                    "bg-[#81B29A] text-white"
                                } else {
                                    "bg-gray-200 text-[#3D405B]"
                                }
                            )
                        >
                            {tab.label()}
                        </button>
                    }).collect::<Vec<_>>()}
                </div>
            </div>
            <Show when=move || tabs.get().is_selected(TreatmentTab::Pharma)>
                <p class="text-lg text-center mb-6">"El objetivo es reponer o imitar la dopamina en el cerebro."</p>
                <div class="overflow-x-auto">
                    <table class="min-w-full bg-white rounded-lg shadow">
                        <thead class="bg-gray-50">
                            <tr>
                                <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">"Clase de Fármaco"</th>
                                <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">"Beneficio Clave"</th>
                                <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">"Desafío Principal"</th>
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-gray-200">
                            <DrugRow name="Levodopa"
                                benefit="El más eficaz para síntomas motores. \"Estándar de oro\"."
                                challenge="Fluctuaciones motoras y discinesias a largo plazo." />
                            <DrugRow name="Agonistas Dopaminérgicos"
                                benefit="Menor riesgo inicial de discinesias."
                                challenge="Riesgo de trastornos del control de impulsos." />
                            <DrugRow name="Inhibidores MAO-B y COMT"
                                benefit="Prolongan el efecto de la levodopa, reduciendo periodos \"off\"."
                                challenge="Pueden aumentar efectos secundarios de la levodopa." />
                        </tbody>
                    </table>
                </div>
            </Show>
            <Show when=move || tabs.get().is_selected(TreatmentTab::Surgical)>
                <p class="text-lg text-center mb-6">"Reservados para pacientes cuyos síntomas motores no se controlan bien con medicación."</p>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
                    <Card class="p-6">
                        <h4 class="font-bold text-xl mb-2">"Estimulación Cerebral Profunda (ECP/DBS)"</h4>
                        <p>"Es el más común. Se implantan electrodos en el cerebro que envían impulsos eléctricos para modular las señales cerebrales anormales. Es reversible y ajustable. Mejora temblor, rigidez y bradicinesia."</p>
                    </Card>
                    <Card class="p-6">
                        <h4 class="font-bold text-xl mb-2">"Ultrasonido Focalizado (HIFU)"</h4>
                        <p>"Procedimiento no invasivo que usa ondas de ultrasonido guiadas por RM para crear una lesión precisa en el cerebro y aliviar el temblor. No requiere incisiones ni implantes."</p>
                    </Card>
                </div>
            </Show>
            <Show when=move || tabs.get().is_selected(TreatmentTab::Support)>
                <p class="text-lg text-center mb-6">"Fundamentales para mantener la calidad de vida y la independencia funcional."</p>
                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6">
                    <SupportCard title="Fisioterapia y Ejercicio"
                        text="Mejora equilibrio, fuerza y flexibilidad. El ejercicio aeróbico puede tener un efecto neuroprotector." />
                    <SupportCard title="Terapia Ocupacional"
                        text="Adapta tareas y entornos para facilitar la vida diaria." />
                    <SupportCard title="Terapia del Habla"
                        text="Aborda problemas de voz baja y dificultades para tragar." />
                    <SupportCard title="Nutrición"
                        text="Una dieta equilibrada y alta en fibra ayuda con el estreñimiento y el bienestar general." />
                    <SupportCard title="Apoyo Psicológico"
                        text="Esencial para manejar la depresión, ansiedad y cambios emocionales." />
                    <SupportCard title="Terapias Complementarias"
                        text="Yoga, Tai Chi o masajes pueden ayudar con el equilibrio y la rigidez." />
                </div>
            </Show>
        </section>
    }
}

#[component]
fn DrugRow(name: &'static str, benefit: &'static str, challenge: &'static str) -> impl IntoView {
    view! {
        <tr>
            <td class="px-6 py-4 whitespace-nowrap font-medium">{name}</td>
            <td class="px-6 py-4 whitespace-nowrap">{benefit}</td>
            <td class="px-6 py-4 whitespace-nowrap">{challenge}</td>
        </tr>
    }
}

#[component]
fn SupportCard(title: &'static str, text: &'static str) -> impl IntoView {
    view! {
        <div class="bg-green-50 p-4 rounded-lg text-center">
            <h4 class="font-semibold">{title}</h4>
            <p class="text-sm text-green-800">{text}</p>
        </div>
    }
}

#[component]
pub fn FutureSection() -> impl IntoView {
    view! {
        <section id=SectionId::Future.anchor() class="pt-16 -mt-16">
            <h2 class="text-3xl font-bold text-center mb-4">"Futuro e Investigación"</h2>
            <p class="text-center max-w-3xl mx-auto text-lg text-gray-600 mb-12">
                "La investigación está en un punto de inflexión, moviéndose del tratamiento de síntomas hacia terapias que modifican la enfermedad, con el objetivo de ralentizar, detener o incluso revertir la progresión de la neurodegeneración."
            </p>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-8 items-center">
                <Card class="p-6">
                    <h3 class="text-xl font-bold mb-4">"Terapias Modificadoras de la Enfermedad en Investigación"</h3>
                    <ul class="space-y-3 list-disc list-inside text-gray-600">
                        <li><b>"Inmunoterapias:"</b>" Anticuerpos y vacunas que apuntan a la proteína tóxica alfa-sinucleína para limpiar el cerebro y detener su propagación."</li>
                        <li><b>"Terapias Génicas:"</b>" Introducción de genes sanos (como GBA1) para corregir defectos genéticos subyacentes."</li>
                        <li><b>"Terapias Celulares:"</b>" Trasplante de células madre para reemplazar las neuronas de dopamina perdidas."</li>
                        <li><b>"Reposicionamiento de Fármacos:"</b>" Prueba de medicamentos existentes (para diabetes, hipertensión) por sus posibles efectos neuroprotectores en la EP."</li>
                    </ul>
                </Card>
                <Card class="p-6">
                    <h3 class="text-xl font-bold mb-4 text-center">"Pipeline de Ensayos Clínicos"</h3>
                    <PipelineChart />
                    <p class="text-sm text-gray-500 text-center mt-2">
                        "Distribución de los ensayos clínicos activos para nuevas terapias."
                    </p>
                </Card>
            </div>
        </section>
    }
}
