//! 章节正文表：以章节 ID 为键的双语课程内容。
//!
//! 只有已完成编写的章节才有条目，其余章节在查找时回退到 `DEFAULT_CONTENT_CHAPTER_ID`。

use crate::models::catalog::{ChapterContent, LessonSection, LocalizedText as T};

/// 回退章节：正文表中没有条目的章节统一展示该章节的内容
pub const DEFAULT_CONTENT_CHAPTER_ID: &str = "c1";

pub static LESSONS: &[(&str, ChapterContent)] = &[
    (
        "c1",
        ChapterContent {
            summary: T::new(
                "In this chapter, we explore the fundamental concepts required to understand the system. Key topics include initialization, core loops, and safety protocols for physical hardware.",
                "اس باب میں، ہم نظام کو سمجھنے کے لیے درکار بنیادی تصورات کا جائزہ لیتے ہیں۔ اہم موضوعات میں آغاز، بنیادی لوپس، اور طبعی ہارڈویئر کے لیے حفاظتی پروٹوکول شامل ہیں۔",
            ),
            sections: &[
                LessonSection {
                    title: T::new("What makes AI physical", "AI کو طبعی کیا بناتا ہے"),
                    body: T::new(
                        "Physical AI systems perceive the world through sensors, reason about what they observe, and act on it through motors and actuators. Unlike a chat model, every decision has a consequence in space and time.",
                        "طبعی مصنوعی ذہانت کے نظام سینسرز کے ذریعے دنیا کو محسوس کرتے ہیں، جو دیکھتے ہیں اس پر غور کرتے ہیں، اور موٹرز اور ایکچویٹرز کے ذریعے عمل کرتے ہیں۔ چیٹ ماڈل کے برعکس، ہر فیصلے کا نتیجہ جگہ اور وقت میں ظاہر ہوتا ہے۔",
                    ),
                },
                LessonSection {
                    title: T::new("The sense–think–act loop", "محسوس کرو، سوچو، عمل کرو کا لوپ"),
                    body: T::new(
                        "Every robot runs a control loop: read sensors, update its model of the world, choose an action, and command the hardware. The loop repeats many times per second and must stay within safe limits.",
                        "ہر روبوٹ ایک کنٹرول لوپ چلاتا ہے: سینسرز پڑھنا، دنیا کا ماڈل اپ ڈیٹ کرنا، عمل کا انتخاب کرنا، اور ہارڈویئر کو حکم دینا۔ یہ لوپ ہر سیکنڈ میں کئی بار دہرایا جاتا ہے اور اسے محفوظ حدود میں رہنا چاہیے۔",
                    ),
                },
            ],
            takeaways: &[
                T::new(
                    "Embodied intelligence couples perception with action.",
                    "مجسم ذہانت ادراک کو عمل سے جوڑتی ہے۔",
                ),
                T::new(
                    "Control loops run continuously and under timing constraints.",
                    "کنٹرول لوپس مسلسل اور وقت کی پابندیوں کے تحت چلتے ہیں۔",
                ),
                T::new(
                    "Safety protocols are part of the design, not an afterthought.",
                    "حفاظتی پروٹوکول ڈیزائن کا حصہ ہیں، بعد کی سوچ نہیں۔",
                ),
            ],
        },
    ),
    (
        "c2",
        ChapterContent {
            summary: T::new(
                "Sensors are how a robot knows anything at all. This chapter covers cameras, LiDAR, IMUs, and force sensors, and how their readings are fused into one estimate of the world.",
                "سینسرز ہی وہ ذریعہ ہیں جن سے روبوٹ کچھ بھی جان پاتا ہے۔ یہ باب کیمرے، لائیڈار، IMU اور فورس سینسرز کا احاطہ کرتا ہے، اور یہ بتاتا ہے کہ ان کی ریڈنگز کو دنیا کے ایک اندازے میں کیسے یکجا کیا جاتا ہے۔",
            ),
            sections: &[
                LessonSection {
                    title: T::new("Exteroceptive sensors", "بیرونی سینسرز"),
                    body: T::new(
                        "Cameras and LiDAR measure the environment. Cameras give rich color and texture, while LiDAR returns precise distances as a point cloud.",
                        "کیمرے اور لائیڈار ماحول کی پیمائش کرتے ہیں۔ کیمرے رنگ اور ساخت کی بھرپور معلومات دیتے ہیں، جبکہ لائیڈار پوائنٹ کلاؤڈ کی صورت میں درست فاصلے لوٹاتا ہے۔",
                    ),
                },
                LessonSection {
                    title: T::new("Proprioceptive sensors", "اندرونی سینسرز"),
                    body: T::new(
                        "Encoders and IMUs measure the robot itself: joint angles, acceleration, and orientation. A humanoid cannot balance without them.",
                        "انکوڈرز اور IMU خود روبوٹ کی پیمائش کرتے ہیں: جوڑوں کے زاویے، رفتار میں تبدیلی، اور سمت۔ ان کے بغیر ہیومنائیڈ توازن برقرار نہیں رکھ سکتا۔",
                    ),
                },
            ],
            takeaways: &[
                T::new(
                    "No single sensor is enough; fusion reduces uncertainty.",
                    "کوئی ایک سینسر کافی نہیں؛ یکجائی غیر یقینی کو کم کرتی ہے۔",
                ),
                T::new(
                    "Every sensor reading carries noise and latency.",
                    "ہر سینسر ریڈنگ میں شور اور تاخیر شامل ہوتی ہے۔",
                ),
            ],
        },
    ),
    (
        "c3",
        ChapterContent {
            summary: T::new(
                "ROS 2 is the nervous system of a modern robot. Nodes exchange messages over topics, services, and actions, so perception, planning, and control can be built and tested independently.",
                "ROS 2 جدید روبوٹ کا اعصابی نظام ہے۔ نوڈز ٹاپکس، سروسز اور ایکشنز کے ذریعے پیغامات کا تبادلہ کرتے ہیں، تاکہ ادراک، منصوبہ بندی اور کنٹرول کو الگ الگ بنایا اور جانچا جا سکے۔",
            ),
            sections: &[
                LessonSection {
                    title: T::new("Nodes and topics", "نوڈز اور ٹاپکس"),
                    body: T::new(
                        "A node is a single process with one responsibility. Nodes publish and subscribe to named topics, and the middleware delivers each message to every subscriber.",
                        "نوڈ ایک واحد پراسیس ہے جس کی ایک ذمہ داری ہوتی ہے۔ نوڈز نامزد ٹاپکس پر پیغامات شائع کرتے اور وصول کرتے ہیں، اور مڈل ویئر ہر پیغام کو ہر وصول کنندہ تک پہنچاتا ہے۔",
                    ),
                },
                LessonSection {
                    title: T::new("Quality of service", "سروس کا معیار"),
                    body: T::new(
                        "ROS 2 runs on DDS, which lets each topic choose reliability and history settings. Sensor streams usually prefer best-effort delivery, while commands need reliable delivery.",
                        "ROS 2 ڈی ڈی ایس پر چلتا ہے، جو ہر ٹاپک کو بھروسے اور تاریخ کی ترتیبات منتخب کرنے دیتا ہے۔ سینسر اسٹریمز عموماً بہترین کوشش کی ترسیل کو ترجیح دیتی ہیں، جبکہ احکامات کو قابل بھروسہ ترسیل درکار ہوتی ہے۔",
                    ),
                },
            ],
            takeaways: &[
                T::new(
                    "Split a robot into small nodes with clear interfaces.",
                    "روبوٹ کو واضح انٹرفیس والے چھوٹے نوڈز میں تقسیم کریں۔",
                ),
                T::new(
                    "Pick QoS settings per topic, not globally.",
                    "QoS کی ترتیبات ہر ٹاپک کے لیے الگ منتخب کریں، سب کے لیے ایک نہیں۔",
                ),
                T::new(
                    "Actions are for long-running goals with feedback.",
                    "ایکشنز طویل مدتی اہداف کے لیے ہیں جن میں فیڈبیک شامل ہو۔",
                ),
            ],
        },
    ),
    (
        "c4",
        ChapterContent {
            summary: T::new(
                "With rclpy you can write ROS 2 nodes in Python. This chapter builds a publisher, a subscriber, and a simple velocity controller for a simulated mobile base.",
                "rclpy کے ذریعے آپ Python میں ROS 2 نوڈز لکھ سکتے ہیں۔ یہ باب ایک پبلشر، ایک سبسکرائبر، اور نقلی موبائل بیس کے لیے ایک سادہ رفتار کنٹرولر بناتا ہے۔",
            ),
            sections: &[
                LessonSection {
                    title: T::new("Your first node", "آپ کا پہلا نوڈ"),
                    body: T::new(
                        "Subclass Node, create a publisher on /cmd_vel, and use a timer callback to send Twist messages at a fixed rate.",
                        "Node کی ذیلی کلاس بنائیں، /cmd_vel پر ایک پبلشر بنائیں، اور مقررہ رفتار سے Twist پیغامات بھیجنے کے لیے ٹائمر کال بیک استعمال کریں۔",
                    ),
                },
                LessonSection {
                    title: T::new("Closing the loop", "لوپ مکمل کرنا"),
                    body: T::new(
                        "Subscribe to odometry, compare the robot's position with the goal, and scale the commanded velocity by the remaining error.",
                        "اوڈومیٹری کو سبسکرائب کریں، روبوٹ کی پوزیشن کا ہدف سے موازنہ کریں، اور باقی ماندہ غلطی کے مطابق رفتار کے حکم کو کم یا زیادہ کریں۔",
                    ),
                },
            ],
            takeaways: &[
                T::new(
                    "Timers, not sleep loops, drive periodic work in ROS 2.",
                    "ROS 2 میں وقفے وقفے کا کام ٹائمرز چلاتے ہیں، sleep لوپس نہیں۔",
                ),
                T::new(
                    "A proportional controller is the simplest closed loop.",
                    "متناسب کنٹرولر سب سے سادہ بند لوپ ہے۔",
                ),
            ],
        },
    ),
];
