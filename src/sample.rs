/// Lint output captured from a failing CI format check, used when no log file is given.
pub const SAMPLE_LOG: &str = r"D:\a\TelegramSearchBot\TelegramSearchBot\TelegramSearchBot.Test\Service\Vector\VectorPerformanceTests.cs(200,74): error WHITESPACE: Fix whitespace formatting. Replace 10 characters with '\s'.
D:\a\TelegramSearchBot\TelegramSearchBot\TelegramSearchBot.Test\Service\Vector\VectorPerformanceTests.cs(209,54): error WHITESPACE: Fix whitespace formatting. Replace 14 characters with '\s'.
D:\a\TelegramSearchBot\TelegramSearchBot\TelegramSearchBot.Test\Service\Vector\VectorPerformanceTests.cs(221,46): error WHITESPACE: Fix whitespace formatting. Replace 14 characters with '\s'.
D:\a\TelegramSearchBot\TelegramSearchBot\TelegramSearchBot.Test\Service\Vector\VectorPerformanceTests.cs(223,20): error WHITESPACE: Fix whitespace formatting. Replace 18 characters with '\s'.
D:\a\TelegramSearchBot\TelegramSearchBot\TelegramSearchBot.Test\Service\Vector\VectorPerformanceTests.cs(226,74): error WHITESPACE: Fix whitespace formatting. Replace 22 characters with '\s'.
D:\a\TelegramSearchBot\TelegramSearchBot\TelegramSearchBot.Test\Service\Vector\VectorSearchIntegrationTests.cs(20,48): error WHITESPACE: Fix whitespace formatting. Replace 2 characters with '\s'.
D:\a\TelegramSearchBot\TelegramSearchBot\TelegramSearchBot.Test\Service\Vector\VectorSearchIntegrationTests.cs(25,60): error WHITESPACE: Fix whitespace formatting. Replace 6 characters with '\s'.
D:\a\TelegramSearchBot\TelegramSearchBot\TelegramSearchBot.Test\Service\Vector\VectorSearchIntegrationTests.cs(39,46): error WHITESPACE: Fix whitespace formatting. Replace 10 characters with '\s'.
D:\a\TelegramSearchBot\TelegramSearchBot\TelegramSearchBot.Test\View\SearchViewTests.cs(12,38): error WHITESPACE: Fix whitespace formatting. Replace 2 characters with '\s'.
D:\a\TelegramSearchBot\TelegramSearchBot\TelegramSearchBot.Test\View\SearchViewTests.cs(14,33): error WHITESPACE: Fix whitespace formatting. Replace 6 characters with '\s'.
D:\a\TelegramSearchBot\TelegramSearchBot\TelegramSearchBot\Attributes\InjectableAttribute.cs(23,2): error FINALNEWLINE: Fix final newline. Insert '\r\n'.
D:\a\TelegramSearchBot\TelegramSearchBot\TelegramSearchBot\Controller\Common\CommandUrlProcessingController.cs(159,2): error FINALNEWLINE: Fix final newline. Insert '\r\n'.
D:\a\TelegramSearchBot\TelegramSearchBot\TelegramSearchBot\Controller\Common\UrlProcessingController.cs(62,2): error FINALNEWLINE: Fix final newline. Insert '\r\n'.
D:\a\TelegramSearchBot\TelegramSearchBot\TelegramSearchBot\Controller\Manage\ScheduledTaskController.cs(248,2): error FINALNEWLINE: Fix final newline. Insert '\r\n'.
D:\a\TelegramSearchBot\TelegramSearchBot\TelegramSearchBot\Handler\MessageVectorGenerationHandler.cs(20,2): error FINALNEWLINE: Fix final newline. Insert '\r\n'.
D:\a\TelegramSearchBot\TelegramSearchBot\TelegramSearchBot\AppBootstrap\AppBootstrap.cs(1,1): error CHARSET: Fix file encoding.
D:\a\TelegramSearchBot\TelegramSearchBot\TelegramSearchBot\AppBootstrap\ASRBootstrap.cs(1,1): error CHARSET: Fix file encoding.
D:\a\TelegramSearchBot\TelegramSearchBot\TelegramSearchBot\AppBootstrap\DaemonBootstrap.cs(1,1): error CHARSET: Fix file encoding.
D:\a\TelegramSearchBot\TelegramSearchBot\TelegramSearchBot\AppBootstrap\OCRBootstrap.cs(1,1): error CHARSET: Fix file encoding.
D:\a\TelegramSearchBot\TelegramSearchBot\TelegramSearchBot\AppBootstrap\QRBootstrap.cs(1,1): error CHARSET: Fix file encoding.
D:\a\TelegramSearchBot\TelegramSearchBot\TelegramSearchBot\AppBootstrap\AppBootstrap.cs(1,1): error IMPORTS: Fix imports ordering.
D:\a\TelegramSearchBot\TelegramSearchBot\TelegramSearchBot\AppBootstrap\ASRBootstrap.cs(1,1): error IMPORTS: Fix imports ordering.
D:\a\TelegramSearchBot\TelegramSearchBot\TelegramSearchBot\AppBootstrap\GeneralBootstrap.cs(1,1): error IMPORTS: Fix imports ordering.
D:\a\TelegramSearchBot\TelegramSearchBot\TelegramSearchBot\AppBootstrap\OCRBootstrap.cs(1,1): error IMPORTS: Fix imports ordering.
D:\a\TelegramSearchBot\TelegramSearchBot\TelegramSearchBot\AppBootstrap\QRBootstrap.cs(1,1): error IMPORTS: Fix imports ordering.";
